//! Fixed roster loaded at process start. State is never persisted, so every
//! restart begins from exactly this data.

use crate::{activity::ActivityRecord, errors::ModelError, Roster};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: [&'static str; 2],
}

const SEED: [SeedActivity; 9] = [
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team for practice and matches",
        schedule: "Practice: Tuesdays and Thursdays, 4:00 PM - 6:00 PM; Games on weekends",
        max_participants: 22,
        participants: ["liam@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Skill development and intramural basketball games",
        schedule: "Wednesdays and Fridays, 4:30 PM - 6:00 PM",
        max_participants: 18,
        participants: ["noah@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore drawing, painting, and mixed media projects",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: ["isabella@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Acting, stagecraft, and production of school plays",
        schedule: "Thursdays, 3:30 PM - 5:30 PM; rehearsal weekends as needed",
        max_participants: 25,
        participants: ["charlotte@mergington.edu", "ethan@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments, science fairs, and guest lectures",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: ["amelia@mergington.edu", "jack@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Practice public speaking, research topics, and compete in debates",
        schedule: "Tuesdays, 4:00 PM - 5:30 PM; tournaments on select weekends",
        max_participants: 14,
        participants: ["henry@mergington.edu", "zoe@mergington.edu"],
    },
];

/// Build the initial roster, validating every record.
pub fn seed_roster() -> Result<Roster, ModelError> {
    let mut roster = Roster::new();
    for s in &SEED {
        let rec = ActivityRecord::new(s.description, s.schedule, s.max_participants, s.participants)?;
        if roster.insert(s.name.to_string(), rec).is_some() {
            return Err(ModelError::Validation(format!("duplicate activity {}", s.name)));
        }
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities() {
        let roster = seed_roster().unwrap();
        assert_eq!(roster.len(), 9);
        assert!(roster.contains_key("Chess Club"));
        assert!(roster.contains_key("Programming Class"));
    }

    #[test]
    fn seed_order_is_kept() {
        let roster = seed_roster().unwrap();
        let names: Vec<&str> = roster.names().collect();
        assert_eq!(&names[..3], &["Chess Club", "Programming Class", "Gym Class"]);
        assert_eq!(names.last(), Some(&"Debate Team"));
    }

    #[test]
    fn chess_club_matches_fixture() {
        let roster = seed_roster().unwrap();
        let chess = &roster["Chess Club"];
        assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.participants, vec!["michael@mergington.edu", "daniel@mergington.edu"]);
    }

    #[test]
    fn every_record_is_valid() {
        for (name, rec) in seed_roster().unwrap() {
            assert!(rec.validate().is_ok(), "{name} failed validation");
            assert_eq!(rec.participants.len(), 2);
        }
    }
}
