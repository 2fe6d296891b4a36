use crate::present::Label;
use crate::support::print_json;
use beeyard_store::{Season, seasonal_tasks};
use chrono::{Datelike, Utc};
use serde_json::{Value, json};

pub fn run(season: Option<Season>, all: bool, json_output: bool) {
    let current = Season::for_month(Utc::now().month());
    let selected: Vec<Season> = if all {
        seasonal_tasks().iter().map(|(s, _)| *s).collect()
    } else {
        vec![season.unwrap_or(current)]
    };

    if json_output {
        let seasons: Vec<Value> = selected
            .iter()
            .map(|s| {
                json!({
                    "season": s,
                    "months": s.months(),
                    "current": *s == current,
                    "tasks": s.tasks(),
                })
            })
            .collect();
        print_json(&json!({
            "action": "season",
            "seasons": seasons,
        }));
        return;
    }

    println!("beeyard season");
    for s in selected {
        println!();
        let marker = if s == current { " (now)" } else { "" };
        println!("  {} {}{}", s.label(), s.months(), marker);
        for (n, task) in s.tasks().iter().enumerate() {
            println!("    {}. {task}", n + 1);
        }
    }
}
