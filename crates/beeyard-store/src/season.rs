//! Seasonal task guide: static reference data, never persisted or edited.

keyword_enum! {
    /// Beekeeping season (northern-hemisphere months).
    pub enum Season {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
    }
}

const SPRING_TASKS: [&str; 8] = [
    "First inspection when temps reach 15°C / 60°F",
    "Check queen presence and brood pattern",
    "Reverse brood boxes if needed",
    "Feed 1:1 syrup to stimulate buildup",
    "Add pollen patties if natural pollen scarce",
    "Monitor for swarm signs (queen cells)",
    "Split strong colonies to prevent swarming",
    "Clean bottom boards and replace old comb",
];

const SUMMER_TASKS: [&str; 8] = [
    "Add honey supers before nectar flow",
    "Monitor queen excluder placement",
    "Check for adequate ventilation",
    "Harvest honey when frames 80%+ capped",
    "Watch for signs of robbing behavior",
    "Conduct varroa mite sugar roll test",
    "Ensure adequate water source nearby",
    "Inspect every 7-10 days during peak",
];

const FALL_TASKS: [&str; 8] = [
    "Remove honey supers after last harvest",
    "Treat for varroa mites (critical timing)",
    "Feed 2:1 heavy syrup for winter stores",
    "Verify minimum 18-27 kg winter stores",
    "Reduce entrance to prevent robbing",
    "Combine weak colonies with strong ones",
    "Install mouse guards before cold weather",
    "Final inspection: queen present, good brood",
];

const WINTER_TASKS: [&str; 8] = [
    "Minimize hive disturbance",
    "Heft hive to check weight (stores)",
    "Add fondant if stores running low",
    "Ensure upper entrance for ventilation",
    "Check for ice blocking entrances",
    "Wrap hives in cold climates if needed",
    "Order equipment for next season",
    "Plan spring management strategy",
];

impl Season {
    /// The eight checklist items for this season, in working order.
    pub fn tasks(&self) -> &'static [&'static str; 8] {
        match self {
            Season::Spring => &SPRING_TASKS,
            Season::Summer => &SUMMER_TASKS,
            Season::Fall => &FALL_TASKS,
            Season::Winter => &WINTER_TASKS,
        }
    }

    pub fn months(&self) -> &'static str {
        match self {
            Season::Spring => "March – May",
            Season::Summer => "June – August",
            Season::Fall => "September – November",
            Season::Winter => "December – February",
        }
    }

    /// Season containing calendar `month` (1 = January). Out-of-range months
    /// wrap, so 13 is January.
    pub fn for_month(month: u32) -> Self {
        match (month.saturating_sub(1) % 12) + 1 {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// The whole guide, seasons in calendar order starting with spring.
pub fn seasonal_tasks() -> [(Season, &'static [&'static str; 8]); 4] {
    [
        (Season::Spring, Season::Spring.tasks()),
        (Season::Summer, Season::Summer.tasks()),
        (Season::Fall, Season::Fall.tasks()),
        (Season::Winter, Season::Winter.tasks()),
    ]
}
