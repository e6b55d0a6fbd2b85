use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::route::Route;
use crate::PLACEHOLDER_IMAGE;

#[component]
pub fn CampaignCard(
    campaign: Campaign,
    /// A withdrawal for this campaign is in flight.
    withdrawing: bool,
    on_donate: EventHandler<Campaign>,
    on_withdraw: EventHandler<u64>,
) -> Element {
    let mut expanded = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    let id = campaign.id();
    let status = campaign.status();
    let status_class = status.class();
    let status_label = status.label();
    let title = truncate(&campaign.record.title, TITLE_PREVIEW_LEN);
    let progress = format!("{:.1}", campaign.progress_percent());
    let bar_width = campaign.progress_bar_width();
    let image = campaign.image_src(*image_failed.read(), PLACEHOLDER_IMAGE).to_string();

    let description = &campaign.record.description;
    let long_description = description.chars().count() > DESCRIPTION_PREVIEW_LEN;
    let shown_description = if long_description && !*expanded.read() {
        truncate(description, DESCRIPTION_PREVIEW_LEN)
    } else {
        description.clone()
    };

    let ended_label = match (campaign.record.is_closed, campaign.is_fully_funded) {
        (true, true) => "Campaign Closed - Goal Reached!",
        (true, false) => "Campaign Closed",
        (false, true) => "Campaign Expired - Goal Reached!",
        (false, false) => "Campaign Expired",
    };

    let withdraw_class = if campaign.is_fully_funded {
        "btn btn-secondary w-full"
    } else {
        "btn btn-danger w-full"
    };

    rsx! {
        div { class: "campaign-card {status_class} elevated rounded-lg elevated-border border overflow-hidden flex flex-col",
            div { class: "relative",
                img {
                    class: "w-full h-48 object-cover",
                    src: "{image}",
                    alt: "{campaign.record.title}",
                    onerror: move |_| image_failed.set(true),
                }
                if status != CampaignStatus::Active {
                    span { class: "badge badge-{status_class} absolute top-2 right-2 px-2 py-1 rounded text-xs font-semibold",
                        "{status_label}"
                    }
                }
            }

            div { class: "p-4 flex flex-col flex-1 space-y-3",
                Link { to: Route::CampaignDetails { id },
                    h3 { class: "text-lg font-semibold text-high hover:text-gold",
                        title: "{campaign.record.title}",
                        "{title}"
                    }
                }

                span { class: "text-xs font-mono text-low",
                    title: "Created by: {campaign.record.creator}",
                    "{campaign.creator_label}"
                }

                p { class: "text-sm text-mid",
                    "{shown_description}"
                    if long_description {
                        button {
                            class: "ml-1 text-gold text-xs",
                            onclick: move |_| {
                                let shown = *expanded.read();
                                expanded.set(!shown);
                            },
                            if *expanded.read() { "Show Less" } else { "Show More" }
                        }
                    }
                }

                div {
                    div { class: "w-full h-2 rounded bg-gray-700",
                        role: "progressbar",
                        aria_valuenow: "{progress}",
                        aria_valuemin: "0",
                        aria_valuemax: "100",
                        div { class: "h-2 rounded bg-gold", style: "width: {bar_width}%;" }
                    }
                    p { class: "text-right text-xs text-low mt-1", "{progress}%" }
                }

                div { class: "flex justify-between text-sm",
                    div {
                        p { class: "text-high font-mono", "{campaign.raised_label} ETH" }
                        p { class: "text-low text-xs", "of {campaign.goal_label} ETH" }
                    }
                    div { class: "text-right",
                        p { class: "text-high font-mono", "{campaign.days_remaining}" }
                        p { class: "text-low text-xs", "days left" }
                    }
                }

                div { class: "mt-auto space-y-2",
                    if campaign.accepts_donations() {
                        button {
                            class: "btn btn-primary w-full",
                            onclick: {
                                let campaign = campaign.clone();
                                move |_| on_donate.call(campaign.clone())
                            },
                            "Donate Now"
                        }
                    } else {
                        p { class: "text-center text-sm text-low", "{ended_label}" }
                    }

                    if campaign.can_withdraw {
                        button {
                            class: "{withdraw_class}",
                            disabled: withdrawing,
                            onclick: move |_| on_withdraw.call(id),
                            if withdrawing {
                                "Processing..."
                            } else if campaign.is_fully_funded {
                                "Withdraw Funds"
                            } else {
                                "Close Failed Campaign"
                            }
                        }
                    }
                }
            }
        }
    }
}
