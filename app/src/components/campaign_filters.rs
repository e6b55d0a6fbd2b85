use dioxus::prelude::*;
use fundraiser_api::prelude::*;

/// Search box, filter and sort selects, and the refresh control.
#[component]
pub fn CampaignFilters(
    query: Signal<CampaignQuery>,
    /// Offer the "My Campaigns" filter.
    has_account: bool,
    last_updated: Option<u64>,
    loading: bool,
    on_refresh: EventHandler<()>,
) -> Element {
    let current = query.read().clone();
    let filter_value = current.filter.as_str();
    let sort_value = current.sort.as_str();
    let filters = CampaignFilter::ALL
        .into_iter()
        .filter(|filter| has_account || *filter != CampaignFilter::Mine);

    rsx! {
        div { class: "flex flex-col md:flex-row md:items-center gap-3 mb-4",
            input {
                class: "input flex-1",
                r#type: "text",
                placeholder: "Search campaigns...",
                value: "{current.search}",
                oninput: move |evt| query.write().search = evt.value(),
            }

            select {
                class: "input",
                value: "{filter_value}",
                onchange: move |evt| match evt.value().parse::<CampaignFilter>() {
                    Ok(filter) => query.write().filter = filter,
                    Err(e) => tracing::warn!("{}", e),
                },
                for filter in filters {
                    option {
                        value: "{filter.as_str()}",
                        selected: filter == current.filter,
                        "{filter.label()}"
                    }
                }
            }

            select {
                class: "input",
                value: "{sort_value}",
                onchange: move |evt| match evt.value().parse::<CampaignSort>() {
                    Ok(sort) => query.write().sort = sort,
                    Err(e) => tracing::warn!("{}", e),
                },
                for sort in CampaignSort::ALL {
                    option {
                        value: "{sort.as_str()}",
                        selected: sort == current.sort,
                        "{sort.label()}"
                    }
                }
            }

            if let Some(updated) = last_updated {
                div { class: "flex items-center gap-2 text-sm text-low",
                    span { "Last updated: {format_time(updated)}" }
                    button {
                        class: "btn btn-secondary text-sm",
                        disabled: loading,
                        onclick: move |_| on_refresh.call(()),
                        if loading { "Refreshing..." } else { "Refresh" }
                    }
                }
            }
        }
    }
}
