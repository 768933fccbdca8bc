//! Terminal browser for the portfolio page.
//!
//! Fetches the projects document once, mounts the page, then drives it from line
//! commands on stdin. Every change notification is printed as it arrives.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_site::config::Config;
use portfolio_site::content::{load_document, HttpContentSource};
use portfolio_site::gallery::cards::DetailBlock;
use portfolio_site::gallery::selection::{PanelBody, PanelContent, ScrollBehavior};
use portfolio_site::gallery::vocabulary::{OptionList, NO_MATCHES_TEXT};
use portfolio_site::gallery::{
    mount, CardActivation, DisplayPrefs, NavKey, PointerTarget, PortfolioController,
    PortfolioEvent, RenderTargets,
};

const USAGE: &str = "commands: focus | type <text> | down | up | enter | esc | pick <tag> | \
outside | remove <tag> | clear | select <id> | show | quit";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "portfolio_site={},browse={}",
                &config.rust_log, &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = HttpContentSource::new(config.content_url.clone(), config.fetch_timeout)?;
    info!("Fetching projects from {}", config.content_url);
    let loaded = load_document(&source).await;

    let prefs = DisplayPrefs {
        reduced_motion: config.reduced_motion,
    };
    let mut page = mount(loaded, RenderTargets::all(), prefs);
    if page.is_inert() {
        println!("Portfolio unavailable.");
        return Ok(());
    }

    page.subscribe(|event: &PortfolioEvent| render_event(event));
    print_page(&page);
    println!("{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let (command, arg) = match line.trim().split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "focus" => page.focus_input(),
            "type" => page.input_changed(arg),
            "down" => {
                page.press_key(NavKey::ArrowDown);
            }
            "up" => {
                page.press_key(NavKey::ArrowUp);
            }
            "enter" => {
                page.press_key(NavKey::Enter);
            }
            "esc" => {
                page.press_key(NavKey::Escape);
            }
            "pick" => page.pointer_down(PointerTarget::TagOption(arg.to_string())),
            "outside" => page.pointer_down(PointerTarget::Elsewhere),
            "remove" => {
                page.remove_tag(arg);
            }
            "clear" => {
                page.clear_all();
            }
            "select" => {
                page.activate_card(arg, CardActivation::Click);
            }
            "show" => print_page(&page),
            "quit" | "exit" => break,
            _ => println!("{USAGE}"),
        }
    }

    Ok(())
}

fn render_event(event: &PortfolioEvent) {
    match event {
        PortfolioEvent::VisibilityChanged { changes } => {
            for change in changes {
                let state = if change.visible { "shown" } else { "hidden" };
                println!("  card {} {state}", change.id);
            }
        }
        PortfolioEvent::SelectionChanged {
            deselected,
            selected,
            panel,
            scroll,
        } => {
            if let Some(id) = deselected {
                println!("  card {id} deselected");
            }
            if let Some(id) = selected {
                println!("  card {id} selected");
            }
            if let Some(scroll) = scroll {
                let how = match scroll {
                    ScrollBehavior::Instant => "instantly",
                    ScrollBehavior::Smooth => "smoothly",
                };
                println!("  (panel scrolled into view {how})");
            }
            print_panel(panel);
        }
        PortfolioEvent::ActiveTagsChanged { chips } => {
            let chips: Vec<String> = chips.iter().map(|c| format!("[{}]", c.text())).collect();
            println!("  active: {}", chips.join(" "));
        }
        PortfolioEvent::OptionListChanged { options, open } => {
            if *open {
                print_options(options);
            } else {
                println!("  options closed");
            }
        }
    }
}

fn print_page(page: &PortfolioController) {
    let text = page.page_text();
    println!(
        "{} (search: {})",
        text.filter_label.as_deref().unwrap_or("Filter projects"),
        text.search_placeholder.as_deref().unwrap_or("type a tag")
    );

    for card in page.cards() {
        let marker = if page.is_selected(card.id()) { '*' } else { ' ' };
        let hidden = if page.is_visible(card.id()) { "" } else { " (hidden)" };
        let tags: Vec<&str> = card.tags().iter().map(String::as_str).collect();
        println!(
            " {marker} {:<16} {}{hidden}  [{}]",
            card.id(),
            card.title(),
            tags.join(", ")
        );
        if !card.summary().is_empty() {
            println!("     {}", card.summary());
        }
    }

    let chips: Vec<String> = page.chips().iter().map(|c| format!("[{}]", c.text())).collect();
    println!(
        "active: {}  ({})",
        chips.join(" "),
        text.clear_button.as_deref().unwrap_or("Clear")
    );

    if page.is_list_open() {
        if let Some(options) = page.options() {
            print_options(options);
        }
    }
    if let Some(panel) = page.panel_content() {
        print_panel(panel);
    }
}

fn print_options(options: &OptionList) {
    if options.is_empty() {
        println!("  options: {NO_MATCHES_TEXT}");
        return;
    }
    let rendered: Vec<String> = options
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if Some(i) == options.active_index() {
                format!(">{}<", option.label)
            } else {
                option.label.clone()
            }
        })
        .collect();
    println!("  options: {}", rendered.join(" | "));
}

fn print_panel(panel: &PanelContent) {
    println!("  ── {} ──", panel.title);
    match &panel.body {
        PanelBody::Message { text } => {
            if !text.is_empty() {
                println!("  {text}");
            }
        }
        PanelBody::Detail { image, detail } => {
            if let Some(image) = image {
                println!("  [image: {} ({})]", image.src, image.alt);
            }
            print_detail(detail);
        }
    }
}

fn print_detail(detail: &DetailBlock) {
    for line in &detail.lines {
        let mut out = String::from("  ");
        if let Some(label) = &line.label {
            out.push_str(label);
            out.push(' ');
        }
        out.push_str(&line.text);
        if let Some(link) = &line.link {
            out.push_str(&format!(" {} <{}>", link.text, link.href));
        }
        println!("{}", out.trim_end());
    }
}
