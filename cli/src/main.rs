use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context};
use fundraiser_api::prelude::*;
use fundraiser_api::rpc::HttpTransport;

type Client = Fundraiser<HttpTransport>;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let rpc = HttpTransport::new(env("RPC")?);
    let address = match std::env::var("CONTRACT") {
        Ok(address) => parse_address(&address).ok_or_else(|| anyhow!("Invalid CONTRACT"))?,
        Err(_) => CONTRACT_ADDRESS,
    };
    let mut client = Fundraiser::new(rpc, address);
    if let Some(from) = optional_address("FROM")? {
        client = client.with_sender(from);
    }

    match env("COMMAND")?.as_str() {
        "chain" => {
            log_chain(&client).await?;
        }
        "count" => {
            log_count(&client).await?;
        }
        "campaigns" => {
            log_campaigns(&client).await?;
        }
        "campaign" => {
            log_campaign(&client).await?;
        }
        "create" => {
            create(&client).await?;
        }
        "donate" => {
            donate(&client).await?;
        }
        "withdraw" => {
            withdraw(&client).await?;
        }
        other => bail!("Invalid command: {other}"),
    };
    Ok(())
}

async fn log_chain(client: &Client) -> Result<(), anyhow::Error> {
    let chain_id = client.chain_id().await?;
    println!("RPC: {}", client.transport().url());
    println!("Chain id: {}", chain_id);
    if chain_id == HARDHAT_CHAIN_ID {
        println!("  (local Hardhat node)");
    }
    println!("Contract: {}", client.address());
    Ok(())
}

async fn log_count(client: &Client) -> Result<(), anyhow::Error> {
    let count = client.campaign_count().await?;
    println!("Campaigns: {}", count);
    Ok(())
}

async fn log_campaigns(client: &Client) -> Result<(), anyhow::Error> {
    let query = CampaignQuery {
        filter: parse_env("FILTER")?.unwrap_or_default(),
        sort: parse_env("SORT")?.unwrap_or_default(),
        search: std::env::var("SEARCH").unwrap_or_default(),
        viewer: client.sender(),
    };

    let snapshot = fetch_campaigns(client, client.sender(), now()).await?;
    for id in &snapshot.failed {
        println!("Warning: failed to load campaign {}", id);
    }

    let visible = query.apply(&snapshot.campaigns);
    for campaign in &visible {
        println!(
            "#{:<4} {:<14} {:>12} / {:<12} ETH {:>6.1}%  {:<40}",
            campaign.id(),
            campaign.status().label(),
            campaign.raised_label,
            campaign.goal_label,
            campaign.progress_percent(),
            truncate(&campaign.record.title, TITLE_PREVIEW_LEN),
        );
    }
    println!("{}", query.summary(visible.len(), snapshot.campaigns.len()));
    Ok(())
}

async fn log_campaign(client: &Client) -> Result<(), anyhow::Error> {
    let id = required_id()?;
    let campaign = fetch_campaign(client, id, client.sender(), now()).await?;
    print_campaign(&campaign);
    Ok(())
}

fn print_campaign(campaign: &Campaign) {
    println!("Campaign #{}", campaign.id());
    println!("  Title: {}", campaign.record.title);
    println!("  Description: {}", campaign.record.description);
    println!("  Status: {}", campaign.status().label());
    println!(
        "  Raised: {} / {} ETH ({:.1}%)",
        campaign.raised_label,
        campaign.goal_label,
        campaign.progress_percent()
    );
    println!(
        "  Deadline: {} ({} days left)",
        campaign.deadline_label, campaign.days_remaining
    );
    println!("  Creator: {}", campaign.record.creator);
    println!("  Image: {}", campaign.record.image_url);
    println!("  Closed: {}", campaign.record.is_closed);
    println!("  Can withdraw: {}", campaign.can_withdraw);
}

async fn create(client: &Client) -> Result<(), anyhow::Error> {
    let form = CampaignForm {
        title: env("TITLE")?,
        description: env("DESCRIPTION")?,
        target: env("TARGET")?,
        duration_days: std::env::var("DURATION")
            .unwrap_or_else(|_| DEFAULT_DURATION_DAYS.to_string()),
        beneficiary: std::env::var("BENEFICIARY")
            .ok()
            .or_else(|| client.sender().map(|sender| sender.to_string()))
            .unwrap_or_default(),
        image: env("IMAGE")?,
    };
    let tx = create_campaign(signer(client), &form)
        .await
        .map_err(report)?;
    println!("Campaign created: {}", tx);
    println!("Campaigns: {}", client.campaign_count().await?);
    Ok(())
}

async fn donate(client: &Client) -> Result<(), anyhow::Error> {
    let id = required_id()?;
    let amount = env("AMOUNT")?;
    let campaign = fetch_campaign(client, id, client.sender(), now()).await?;
    let tx = fundraiser_api::actions::donate(signer(client), &campaign, &amount)
        .await
        .map_err(report)?;
    println!("Donated {} ETH to campaign #{}: {}", amount.trim(), id, tx);
    Ok(())
}

async fn withdraw(client: &Client) -> Result<(), anyhow::Error> {
    let id = required_id()?;
    let tx = fundraiser_api::actions::withdraw(signer(client), id)
        .await
        .map_err(report)?;
    println!("Withdrew funds of campaign #{}: {}", id, tx);
    Ok(())
}

/// Writes need a `FROM` account unlocked on the node.
fn signer(client: &Client) -> Option<&Client> {
    client.sender().map(|_| client)
}

fn report(err: ActionError) -> anyhow::Error {
    match err {
        ActionError::WalletRequired => anyhow!("Missing FROM env var"),
        err => anyhow!("{} ({})", err.user_message(), err),
    }
}

fn env(name: &str) -> Result<String, anyhow::Error> {
    std::env::var(name).with_context(|| format!("Missing {name} env var"))
}

fn parse_env<T: FromStr<Err = String>>(name: &str) -> Result<Option<T>, anyhow::Error> {
    match std::env::var(name) {
        Ok(value) => T::from_str(&value)
            .map(Some)
            .map_err(|e| anyhow!("Invalid {name}: {e}")),
        Err(_) => Ok(None),
    }
}

fn optional_address(name: &str) -> Result<Option<Address>, anyhow::Error> {
    match std::env::var(name) {
        Ok(value) => parse_address(&value)
            .map(Some)
            .ok_or_else(|| anyhow!("Invalid {name}")),
        Err(_) => Ok(None),
    }
}

fn required_id() -> Result<u64, anyhow::Error> {
    let id = env("ID")?;
    u64::from_str(id.trim()).with_context(|| format!("Invalid ID: {id}"))
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
