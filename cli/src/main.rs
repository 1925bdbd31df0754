//! Command-line driver for the widget API.
//!
//! Reads the browser cookie string from AMBET_COOKIES and exposes one
//! subcommand per widget surface. Intended for poking at the API and
//! for manual verification, not for automation.

use ambet_engine::{display, overlay, wheel, ResolvedRegistry, RewardWidget};
use ambet_networking::api;
use ambet_networking::{AmbetClient, BrowserCookies};
use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: ambet <boxes|spin|open|shop|sessions|jackpots|games>";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ambet_networking=debug,ambet_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = std::env::args().nth(1).context(USAGE)?;
    let client = AmbetClient::new(cookies_from_env()?);

    match command.as_str() {
        "boxes" => list_boxes(&client).await,
        "spin" => spin(&client).await,
        "open" => open_loot(&client).await,
        "shop" => shop(&client).await,
        "sessions" => sessions(&client).await,
        "jackpots" => jackpots().await,
        "games" => games(&client).await,
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }
}

fn cookies_from_env() -> Result<BrowserCookies> {
    let raw = std::env::var("AMBET_COOKIES")
        .context("AMBET_COOKIES must hold the browser cookie string")?;
    Ok(BrowserCookies::new(raw))
}

async fn list_boxes(client: &AmbetClient) -> Result<()> {
    let boxes = api::fetch_user_boxes(client).await?;
    if boxes.is_empty() {
        println!("no active boxes");
        return Ok(());
    }
    for b in &boxes {
        let name = b.box_info.name.as_deref().unwrap_or("(unnamed)");
        println!(
            "{}  {:?}  {}  ({} reward options)",
            b.user_box_id.as_str(),
            b.box_info.box_type,
            name,
            b.box_info.rewards.len()
        );
    }
    Ok(())
}

/// Resolve the first active wheel box and print the spin plan the
/// widget would animate.
async fn spin(client: &AmbetClient) -> Result<()> {
    let mut widget = RewardWidget::wheel(ResolvedRegistry::new());
    widget.refresh(client).await?;
    if widget.select_first().is_none() {
        println!("no active wheel boxes");
        return Ok(());
    }

    let segment_count = widget
        .boxes()
        .first()
        .map(|b| b.box_info.rewards.len())
        .unwrap_or(1);
    let won = widget.resolve_selected(client).await?;
    let plan = wheel::plan_spin(segment_count, won.index, &mut rand::thread_rng());

    println!("won: {}", display::description_text(&won.option));
    println!(
        "segment {} of {}; rotation {:.0}° (overshoot {:+.0}°), {:.1}s total",
        won.index,
        segment_count,
        plan.final_rotation,
        plan.overshoot,
        plan.total_secs()
    );
    Ok(())
}

/// Resolve the first active loot/mystery box.
async fn open_loot(client: &AmbetClient) -> Result<()> {
    let mut widget = RewardWidget::loot(ResolvedRegistry::new());
    widget.refresh(client).await?;
    if widget.select_first().is_none() {
        println!("no active loot boxes");
        return Ok(());
    }
    let won = widget.resolve_selected(client).await?;
    println!("won: {}", display::description_text(&won.option));
    Ok(())
}

async fn shop(client: &AmbetClient) -> Result<()> {
    let items = api::fetch_shop_items(client).await?;
    for item in &items {
        println!(
            "{}  {:.0}  {}",
            item.id,
            item.price.value,
            item.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

async fn sessions(client: &AmbetClient) -> Result<()> {
    let records = api::fetch_recent_sessions(client).await?;
    for s in &records {
        println!(
            "{}  {}  {}  {}",
            s.display_time(),
            s.ip.as_deref().unwrap_or("-"),
            s.os.as_deref().unwrap_or("-"),
            s.browser.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Print the level-1 jackpot values feeding the overlays.
async fn jackpots() -> Result<()> {
    let stats = api::JackpotFeed::new().fetch_stats().await?;
    for o in [&overlay::BELL_LINK, &overlay::VIP_BELL_LINK, &overlay::HIGH_CASH] {
        match stats.level1_value(o.instance_name, overlay::OVERLAY_CURRENCY) {
            Some(value) => println!(
                "{}: {}",
                o.instance_name,
                overlay::format_jackpot_amount(value)
            ),
            None => println!("{}: (not in feed)", o.instance_name),
        }
    }
    Ok(())
}

/// Print the newest lobby games, the set the "New" badge marks.
async fn games(client: &AmbetClient) -> Result<()> {
    for id in api::fetch_new_game_ids(client).await? {
        println!("{}", id);
    }
    Ok(())
}
