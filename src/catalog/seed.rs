//! Default Catalog
//!
//! The activity list a fresh server starts with when no seed file is configured.

use super::types::{ActivityCollection, ActivityInfo};

pub fn default_activities() -> ActivityCollection {
    ActivityCollection::new()
        .with(
            "Chess Club",
            ActivityInfo::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .participants(["michael@school.example.edu", "daniel@school.example.edu"]),
        )
        .with(
            "Programming Class",
            ActivityInfo::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .participants(["emma@school.example.edu", "sophia@school.example.edu"]),
        )
        .with(
            "Gym Class",
            ActivityInfo::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .participants(["john@school.example.edu", "olivia@school.example.edu"]),
        )
        .with(
            "Basketball",
            ActivityInfo::new(
                "Team practice and inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .participants(["liam@school.example.edu"]),
        )
        .with(
            "Soccer",
            ActivityInfo::new(
                "Outdoor soccer drills and weekend matches",
                "Wednesdays, 3:30 PM - 5:00 PM; Saturdays, 10:00 AM",
                22,
            ),
        )
        .with(
            "Art Club",
            ActivityInfo::new(
                "Explore painting, drawing, and mixed media",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .participants(["ava@school.example.edu"]),
        )
        .with(
            "Drama Club",
            ActivityInfo::new(
                "Acting workshops and the spring stage production",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            ),
        )
        .with(
            "Math Club",
            ActivityInfo::new(
                "Problem solving sessions and competition preparation",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
            )
            .participants(["noah@school.example.edu"]),
        )
        .with(
            "Debate Team",
            ActivityInfo::new(
                "Research, argumentation, and regional debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
        )
}
