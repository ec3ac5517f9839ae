//! Static psychoeducational content
//!
//! Seeded peer stories, growth pathways, and comfort activities. All
//! read-only; stories additionally seed the user's story feed, which can
//! grow at runtime.

use crate::models::{Activity, ActivityCategory, GrowthPathway, Story};

/// The three seeded peer stories
pub fn seed_stories() -> Vec<Story> {
    vec![
        Story {
            id: 1,
            title: "The Pressure of the First Big Project".to_string(),
            snippet: "I felt like I was drowning. Everyone seemed to know what they were doing, \
                      and I was just faking it. Talking about it with a senior who went through \
                      the same thing made all the difference."
                .to_string(),
            author: "Software Developer, 24".to_string(),
        },
        Story {
            id: 2,
            title: "Juggling Work and Family Expectations".to_string(),
            snippet: "My family didn't understand why I had to work late. It felt like I was \
                      failing on both fronts. Learning to set boundaries was hard, but it saved \
                      my sanity."
                .to_string(),
            author: "Marketing Manager, 28".to_string(),
        },
        Story {
            id: 3,
            title: "Feeling Isolated While Working Remotely".to_string(),
            snippet: "The silence was deafening. I missed the small office chats. I started a \
                      virtual 'chai break' with my team, and it helped us reconnect on a human \
                      level again."
                .to_string(),
            author: "Graphic Designer, 26".to_string(),
        },
    ]
}

/// The four guided growth pathways
pub fn growth_pathways() -> Vec<GrowthPathway> {
    vec![
        GrowthPathway {
            id: 1,
            title: "Building Emotional Resilience".to_string(),
            description: "Learn to bounce back from setbacks and navigate stress with grace."
                .to_string(),
            category: "Resilience".to_string(),
        },
        GrowthPathway {
            id: 2,
            title: "Mastering Mindful Communication".to_string(),
            description: "Improve your work relationships by communicating with empathy and clarity."
                .to_string(),
            category: "Skills".to_string(),
        },
        GrowthPathway {
            id: 3,
            title: "First-Jobber's Survival Guide".to_string(),
            description: "Navigate the challenges and anxieties of starting your career."
                .to_string(),
            category: "Career".to_string(),
        },
        GrowthPathway {
            id: 4,
            title: "Finding Your Work-Life Harmony".to_string(),
            description: "Techniques to create a sustainable balance that works for you."
                .to_string(),
            category: "Balance".to_string(),
        },
    ]
}

/// The ten comfort activities, keyed by the emotional state they target
pub fn comfort_activities() -> Vec<Activity> {
    fn activity(
        id: &str,
        title: &str,
        duration: &str,
        description: &str,
        category: ActivityCategory,
    ) -> Activity {
        Activity {
            id: id.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
            description: description.to_string(),
            category,
        }
    }

    vec![
        activity("1", "4-7-8 Breathing", "2 min", "Calming breath work", ActivityCategory::Anxious),
        activity("2", "Grounding 5-4-3-2-1", "3 min", "Connect with senses", ActivityCategory::Anxious),
        activity("3", "Body Scan", "7 min", "Release physical tension", ActivityCategory::Stressed),
        activity("4", "Self-Compassion", "3 min", "Kind affirmations", ActivityCategory::Stressed),
        activity("5", "Mindful Moment", "2 min", "Present awareness", ActivityCategory::Calm),
        activity("6", "Nature Sounds", "5 min", "Relaxing auditory escape", ActivityCategory::Calm),
        activity("7", "Guided Meditation", "5 min", "Find your center", ActivityCategory::Overwhelmed),
        activity("8", "Deep Belly Breathing", "2 min", "Reset your nervous system", ActivityCategory::Overwhelmed),
        activity("9", "Box Breathing", "3 min", "Focus and clarity", ActivityCategory::Anxious),
        activity("10", "Gratitude Journal", "4 min", "Shift your perspective", ActivityCategory::Stressed),
    ]
}
