use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command};
use entries::{Entry, Logbook};
use form::{Form, Submit};
use session::Session;
use std::io::{self, BufRead, Write};
use store::Store;
use time::OffsetDateTime;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod entries;
mod form;
mod render;
mod session;
mod store;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut store = Store::open(&cli.store);
    let session = Session::resolve(&mut store, cli.user.as_deref());

    if cli.user.as_deref().is_some_and(|user| !user.is_empty()) {
        store.save().context("Failed to remember username")?;
    }

    println!("{}", session.welcome());

    let mut logbook = Logbook::load(&store, &session.namespace);

    match cli.command {
        Command::Add { title, content } => {
            let mut form = Form::new();
            form.title = title;
            form.content = content;

            if let Submit::Created(id) = form.submit(&mut logbook, OffsetDateTime::now_local()?) {
                logbook.save(&mut store).context("Failed to save logbook")?;
                println!("Saved entry {id}");
                render_all(&logbook)?;
            }
        }
        Command::Edit { id, title, content } => {
            let mut form = Form::new();

            if !form.begin_edit(&logbook, id) {
                bail!("No entry with id {id}");
            }
            debug!(mode = ?form.mode(), label = form.submit_label(), "form switched to editing");

            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }

            if let Submit::Updated(id) = form.submit(&mut logbook, OffsetDateTime::now_local()?) {
                logbook.save(&mut store).context("Failed to save logbook")?;
                println!("Updated entry {id}");
                render_all(&logbook)?;
            }
        }
        Command::Delete { id, yes } => {
            if logbook.get(id).is_none() {
                bail!("No entry with id {id}");
            }

            if yes || confirm("Are you sure you want to delete this entry?")? {
                logbook.remove(id);
                logbook.save(&mut store).context("Failed to save logbook")?;
                println!("Deleted entry {id}");
                render_all(&logbook)?;
            }
        }
        Command::List => render_all(&logbook)?,
        Command::Search { query } => {
            let matches = logbook.filter(&query);
            render::render(&matches, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn render_all(logbook: &Logbook) -> anyhow::Result<()> {
    let entries: Vec<&Entry> = logbook.entries().iter().collect();
    render::render(&entries, &mut io::stdout().lock())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
