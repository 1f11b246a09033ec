mod view;

use anyhow::Result;
use rag_client::QueryService;
use std::io::{BufRead, Write};
use view::QueryView;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let service = QueryService::from_env();
    if !service.probe().await {
        log::warn!("RAG backend did not answer the liveness probe; queries may fail");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        interactive_loop(&service).await
    } else {
        run_once(&service, &args.join(" ")).await
    }
}

/// One-shot mode: submit the command-line words as a single query.
async fn run_once(service: &QueryService, query: &str) -> Result<()> {
    let mut view = QueryView::new();
    view.set_input(query);
    view.submit(service).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(result) = view.last() {
        view::render_result(result, &mut out)?;
    }
    Ok(())
}

/// Prompt loop: one query per line until EOF or an empty line. Each
/// submission is awaited before the next prompt, so requests never overlap.
async fn interactive_loop(service: &QueryService) -> Result<()> {
    let mut view = QueryView::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to Socrates")?;
    writeln!(out, "Type a query, or an empty line to quit.")?;

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        view.set_input(query);
        writeln!(out, "Loading...")?;
        view.submit(service).await;
        if let Some(result) = view.last() {
            view::render_result(result, &mut out)?;
        }
    }

    Ok(())
}
