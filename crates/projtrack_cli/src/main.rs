//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `projtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use projtrack_core::{
    completion_percentage, dashboard_stats, db::open_db_in_memory, ProjectStore,
    SqliteProjectRepository,
};

fn main() {
    println!("projtrack_core ping={}", projtrack_core::ping());
    println!("projtrack_core version={}", projtrack_core::core_version());

    // Why: an in-memory store keeps the probe deterministic and exercises
    // the open -> migrate -> init path without touching user data.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: cannot open in-memory database: {err}");
            std::process::exit(1);
        }
    };
    let repo = match SqliteProjectRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("error: cannot initialize repository: {err}");
            std::process::exit(1);
        }
    };
    let store = match ProjectStore::init(repo) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: cannot initialize project store: {err}");
            std::process::exit(1);
        }
    };

    let stats = dashboard_stats(store.projects());
    println!(
        "projects={} in_progress={} completed={} tasks={}",
        stats.total_projects, stats.in_progress, stats.completed, stats.total_tasks
    );
    for project in store.projects() {
        println!(
            "- {} [{} | {} priority] {}% complete",
            project.name,
            project.status,
            project.priority,
            completion_percentage(&project.tasks)
        );
    }
}
