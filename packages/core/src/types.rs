// ABOUTME: Fixed content tables for briefs, approaches and the quiz
// ABOUTME: Every table is an enum whose declaration order is its table order

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase and strip everything but letters and digits, so that
/// "Reading/Writing", "reading-writing" and "ReadingWriting" compare equal.
fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Declares a table enum with its display labels.
///
/// Generates `ALL` (declaration order), `label()`, `Display`, `FromStr`
/// and serde support that uses the label as the wire value.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every entry in table order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn variant_name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some(exact) = $name::ALL.iter().copied().find(|v| v.label() == s) {
                    return Ok(exact);
                }

                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.label()) == wanted || normalize(v.variant_name()) == wanted)
                    .ok_or_else(|| CoreError::UnknownLabel {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

labeled_enum! {
    /// Training topic a brief is written about
    Topic {
        ComplianceTraining => "Compliance Training",
        SalesEnablement => "Sales Enablement",
        CustomerServiceBasics => "Customer Service Basics",
        SoftwareOnboarding => "Software Onboarding",
        LeadershipDevelopment => "Leadership Development",
        DiversityInclusion => "Diversity & Inclusion",
        ProjectManagementEssentials => "Project Management Essentials",
        ConflictResolution => "Conflict Resolution",
        HealthSafety => "Health & Safety",
        DataPrivacySecurity => "Data Privacy & Security",
    }
}

labeled_enum! {
    /// Learner population a brief targets
    Audience {
        RetailStaff => "Retail staff",
        RemoteTechEmployees => "Remote tech employees",
        CorporateManagers => "Corporate managers",
        HrTeams => "HR teams",
        CallCenterRepresentatives => "Call center representatives",
        ManufacturingLineWorkers => "Manufacturing line workers",
        HealthcareProfessionals => "Healthcare professionals",
        FinancialAdvisors => "Financial advisors",
    }
}

labeled_enum! {
    /// Project constraint imposed by the client
    Constraint {
        LimitedBudget => "Limited budget",
        TightTimeline => "Tight timeline",
        Scorm12Compliant => "Must be SCORM 1.2 compliant",
        XapiCompliant => "Must be xAPI compliant",
        MobileFriendly => "Needs a fully mobile-friendly approach",
        MultilingualTranslation => "Requires translation for multilingual audience",
    }
}

labeled_enum! {
    /// Delivery format of the training
    Format {
        MicroLearning => "Micro-learning",
        ScenarioBasedElearning => "Scenario-based eLearning",
        IltElearningBlend => "ILT + eLearning blend",
        Gamified => "Gamified approach",
        VideoBasedModules => "Video-based modules",
        SelfPacedWithQuizzes => "Self-paced modules with quizzes",
    }
}

labeled_enum! {
    /// Learner modality preference.
    ///
    /// Declaration order breaks quiz ties: the earlier style wins.
    LearningStyle {
        Visual => "Visual",
        Auditory => "Auditory",
        Kinesthetic => "Kinesthetic",
        ReadingWriting => "Reading/Writing",
        Social => "Social",
        Solo => "Solo",
    }
}

labeled_enum! {
    /// Learning theory underpinning an approach
    Theory {
        Behaviorism => "Behaviorism",
        Cognitivism => "Cognitivism",
        Constructivism => "Constructivism",
        Humanism => "Humanism",
        SocialLearning => "Social Learning",
        Connectivism => "Connectivism",
    }
}

labeled_enum! {
    /// Instructional design process model
    IdModel {
        Addie => "ADDIE",
        Sam => "SAM (Successive Approximation Model)",
        DickCarey => "Dick & Carey",
        GagneNineEvents => "Gagné’s Nine Events",
        Kemp => "Kemp Design Model",
        RapidPrototyping => "Rapid Prototyping",
    }
}
