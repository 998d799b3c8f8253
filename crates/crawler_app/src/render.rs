//! Terminal rendering of the view model. Presentation only; all state logic
//! lives in `crawler_core`.

use crawler_core::{AppViewModel, Phase};

pub(crate) fn welcome() {
    println!("url crawler. `discover <url>` finds links; `help` lists commands");
}

pub(crate) fn help() {
    println!("commands:");
    println!("  discover <url>   find links within the page");
    println!("  list             show discovered urls with selection marks");
    println!("  search <text>    filter `list` output (empty text clears)");
    println!("  toggle <n>       flip selection on row n of `list`");
    println!("  all              select all / deselect all");
    println!("  run              crawl the selected urls, one at a time");
    println!("  results          show the results of the current run");
    println!("  export [dir]     write the completed run as csv");
    println!("  quit             leave");
}

/// One-line status, printed after every dirty transition.
pub(crate) fn status(view: &AppViewModel) {
    let phase = match view.phase {
        Phase::Idle => "idle",
        Phase::Discovering => "discovering",
        Phase::Processing => "processing",
    };

    let mut line = format!(
        "[{phase}] urls: {} ({} selected)",
        view.url_count, view.selected_count
    );
    if view.total_to_process > 0 {
        line.push_str(&format!(
            " | processed {}/{}",
            view.processed_count, view.total_to_process
        ));
    }
    if view.export_ready {
        line.push_str(" | export ready");
    }
    if let Some(error) = &view.discovery_error {
        line.push_str(&format!(" | no URLs found: {error}"));
    }
    println!("{line}");
}

pub(crate) fn url_list(view: &AppViewModel) {
    if view.url_count == 0 {
        println!("no urls discovered yet");
        return;
    }
    for (index, row) in view.urls.iter().enumerate() {
        let mark = if row.selected { 'x' } else { ' ' };
        println!("{:>3} [{mark}] {}", index + 1, row.url);
    }
    if view.urls.len() < view.url_count {
        println!(
            "({} of {} urls match `{}`)",
            view.urls.len(),
            view.url_count,
            view.search_input
        );
    }
}

pub(crate) fn result_list(view: &AppViewModel) {
    if view.total_to_process == 0 {
        println!("no run yet");
        return;
    }
    println!(
        "processed {} of {} urls",
        view.processed_count, view.total_to_process
    );
    for row in &view.results {
        let mark = if row.succeeded { "ok " } else { "err" };
        println!("{mark} {:>3} {} {}", row.status, row.url, row.summary);
    }
}

pub(crate) fn note(text: &str) {
    println!("{text}");
}
