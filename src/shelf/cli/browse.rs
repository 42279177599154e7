//! # Browse Session
//!
//! A line-oriented stand-in for the interactive page. Each input line is one
//! UI event: a selection change re-renders the catalog, `expand N` opens the
//! details of the item with tab index `N`.
//!
//! Tab indexes keep growing across re-renders within a session, the same
//! way focus order does on the page, so `expand` always refers to the most
//! recent listing.

use super::render::{render_catalog, render_details};
use super::styles::SHELF_THEME;
use colored::Colorize;
use shelf::api::CatalogApi;
use shelf::error::Result;
use shelf::filter::FilterSelection;
use shelf::render::Expansion;
use shelf::sort::SortStrategy;
use shelf::store::ProductSource;
use std::io::{BufRead, Write};

const PROMPT: &str = "shelf> ";

const HELP: &str = "\
Commands:
  sort <strategy>   best-rated, lowest-price, highest-price, a-z, z-a
  brand <brand>     filter by brand (Todos for all)
  type <type>       filter by product type (Todos for all)
  name [text]       filter by name; empty text matches everything
  expand <n>        show the details of item n
  clear             reset brand, type and name filters
  status            show the current selections
  list              print the current listing again
  help              show this help
  quit              leave the session";

enum Event {
    Sort(String),
    Brand(String),
    Type(String),
    Name(String),
    Expand(String),
    Clear,
    Status,
    List,
    Help,
    Quit,
    Unknown(String),
}

fn parse_event(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim().to_string()),
        None => (line, String::new()),
    };

    let event = match command.to_lowercase().as_str() {
        "sort" | "s" => Event::Sort(rest),
        "brand" | "b" => Event::Brand(rest),
        "type" | "t" => Event::Type(rest),
        "name" | "n" => Event::Name(rest),
        "expand" | "e" => Event::Expand(rest),
        "clear" => Event::Clear,
        "status" => Event::Status,
        "list" | "ls" => Event::List,
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        other => Event::Unknown(other.to_string()),
    };
    Some(event)
}

fn warn_text(text: &str, use_color: bool) -> String {
    if use_color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

fn prompt_text(use_color: bool) -> String {
    match SHELF_THEME.get("prompt") {
        Some(style) if use_color => style.apply_to(PROMPT).force_styling(true).to_string(),
        _ => PROMPT.to_string(),
    }
}

fn print_listing<S: ProductSource, W: Write>(
    api: &mut CatalogApi<S>,
    output: &mut W,
    use_color: bool,
) -> Result<()> {
    api.refresh();
    write!(output, "{}", render_catalog(api.mount(), use_color))?;
    Ok(())
}

fn status_text<S: ProductSource>(api: &CatalogApi<S>) -> String {
    let selection = api.selection();
    format!(
        "brand: {}\ntype: {}\nname: {}\nsort: {}",
        selection.brand,
        selection.product_type,
        selection.name.as_deref().unwrap_or(""),
        api.sort().map(SortStrategy::label).unwrap_or("none"),
    )
}

/// Runs the session until `quit` or end of input.
pub fn run_session<S, R, W>(
    api: &mut CatalogApi<S>,
    input: R,
    mut output: W,
    use_color: bool,
) -> Result<()>
where
    S: ProductSource,
    R: BufRead,
    W: Write,
{
    print_listing(api, &mut output, use_color)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt_text(use_color))?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(output)?;
                break;
            }
        };

        let Some(event) = parse_event(&line) else {
            continue;
        };

        match event {
            Event::Sort(label) => {
                let strategy = SortStrategy::from_label(&label);
                if strategy.is_none() {
                    writeln!(
                        output,
                        "{}",
                        warn_text(&format!("Unknown sort '{}', keeping filter order", label), use_color)
                    )?;
                }
                api.set_sort(strategy);
                print_listing(api, &mut output, use_color)?;
            }
            Event::Brand(value) => {
                api.set_brand_filter(&value);
                print_listing(api, &mut output, use_color)?;
            }
            Event::Type(value) => {
                api.set_type_filter(&value);
                print_listing(api, &mut output, use_color)?;
            }
            Event::Name(value) => {
                api.set_name_filter(&value);
                print_listing(api, &mut output, use_color)?;
            }
            Event::Expand(arg) => {
                let Ok(tab_index) = arg.parse::<u64>() else {
                    writeln!(output, "{}", warn_text("Usage: expand <n>", use_color))?;
                    continue;
                };
                match api.expand(tab_index) {
                    Expansion::NotFound => writeln!(
                        output,
                        "{}",
                        warn_text(&format!("No product with tab index {}", tab_index), use_color)
                    )?,
                    Expansion::Expanded | Expansion::AlreadyExpanded => {
                        if let Some(item) = api.mount().item(tab_index) {
                            write!(output, "{}", render_details(item, use_color))?;
                        }
                    }
                }
            }
            Event::Clear => {
                api.set_selection(FilterSelection::new());
                print_listing(api, &mut output, use_color)?;
            }
            Event::Status => writeln!(output, "{}", status_text(api))?,
            Event::List => print_listing(api, &mut output, use_color)?,
            Event::Help => writeln!(output, "{}", HELP)?,
            Event::Quit => break,
            Event::Unknown(command) => writeln!(
                output,
                "{}",
                warn_text(&format!("Unknown command '{}'. Type 'help'.", command), use_color)
            )?,
        }
    }

    output.flush()?;
    Ok(())
}
