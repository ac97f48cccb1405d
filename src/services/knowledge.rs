//! Canned answers for the paint-guru endpoint.
//!
//! Matching is deliberately simple: lowercase the question, walk an ordered
//! rule table, and answer with the first rule whose trigger list has any
//! substring hit. No scoring, no NLU.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Interior,
    Exterior,
    Cabinet,
    Commercial,
    Pricing,
    Coverage,
    Timeline,
    Preparation,
    Warranty,
    Contact,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Interior => "interior",
            Topic::Exterior => "exterior",
            Topic::Cabinet => "cabinet",
            Topic::Commercial => "commercial",
            Topic::Pricing => "pricing",
            Topic::Coverage => "coverage",
            Topic::Timeline => "timeline",
            Topic::Preparation => "preparation",
            Topic::Warranty => "warranty",
            Topic::Contact => "contact",
        };
        write!(f, "{}", name)
    }
}

/// One matching rule: trigger substrings plus the canned answer sections.
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub heading: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
}

impl TopicRule {
    fn compose(&self) -> String {
        let mut answer = String::new();
        answer.push_str(self.heading);
        answer.push_str("\n\n");
        answer.push_str(self.summary);
        answer.push_str("\n\n");
        for bullet in self.bullets {
            answer.push_str("• ");
            answer.push_str(bullet);
            answer.push('\n');
        }
        answer.push('\n');
        answer.push_str(CONTACT_FRAGMENT);
        answer
    }
}

pub const CONTACT_FRAGMENT: &str =
    "Questions? Call us at (251) 555-0199 or email hello@bayfrontpainting.com for a free estimate.";

const MENU: &str = "I'm the Bayfront paint guru. Ask me about:\n\
• Interior painting\n\
• Exterior painting\n\
• Cabinet refinishing\n\
• Commercial work\n\
• Pricing and estimates\n\
• Our service area\n\
• Project timelines\n\
• How we prepare\n\
• Our warranty";

// Evaluated top to bottom; the first matching rule wins. Pricing sits ahead
// of exterior so cost questions answer with pricing, and interior sits first
// so any question naming it gets the interior answer.
const RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Interior,
        triggers: &["interior", "inside", "indoor"],
        heading: "Interior Painting",
        summary: "We repaint walls, ceilings, trim, and doors with premium \
                  low-VOC paint, leaving rooms clean and ready to live in.",
        bullets: &[
            "Walls, ceilings, trim, doors, and accent features",
            "Drywall patching and surface repair included",
            "Low-VOC and zero-VOC paint options",
            "Furniture moved, covered, and put back",
        ],
    },
    TopicRule {
        topic: Topic::Pricing,
        triggers: &["price", "cost", "estimate", "quote"],
        heading: "Pricing & Estimates",
        summary: "Every project starts with a free on-site estimate. Pricing \
                  depends on surface condition, square footage, and paint grade.",
        bullets: &[
            "Free, no-obligation on-site estimates",
            "Interior rooms typically start around $350",
            "Exterior projects priced by square footage and prep needs",
            "Written quote with a fixed price before work begins",
        ],
    },
    TopicRule {
        topic: Topic::Exterior,
        triggers: &["exterior", "outside", "outdoor"],
        heading: "Exterior Painting",
        summary: "We paint siding, brick, stucco, and fiber cement with \
                  coatings chosen for Gulf Coast heat and humidity.",
        bullets: &[
            "Siding, brick, stucco, and fiber cement",
            "Pressure washing and scraping before any paint goes on",
            "Caulking and weather sealing included",
            "Mildew-resistant coatings rated for coastal climates",
        ],
    },
    TopicRule {
        topic: Topic::Cabinet,
        triggers: &["cabinet", "kitchen", "bathroom"],
        heading: "Cabinet Refinishing",
        summary: "Kitchen and bathroom cabinets get a factory-smooth sprayed \
                  finish at a fraction of replacement cost.",
        bullets: &[
            "Degrease, sand, and prime every surface",
            "Sprayed enamel finish, not brushed",
            "Doors and drawers finished off-site in our shop",
            "Color matching to any brand swatch",
        ],
    },
    TopicRule {
        topic: Topic::Commercial,
        triggers: &["commercial", "business", "office"],
        heading: "Commercial Painting",
        summary: "We keep offices, storefronts, and restaurants open while we \
                  work, scheduling around your business hours.",
        bullets: &[
            "Offices, retail, restaurants, and light industrial",
            "Evening and weekend scheduling available",
            "Low-odor products for occupied spaces",
            "Licensed, bonded, and fully insured crews",
        ],
    },
    TopicRule {
        topic: Topic::Coverage,
        triggers: &[
            "area",
            "location",
            "serve",
            "cover",
            "mobile",
            "daphne",
            "fairhope",
            "spanish fort",
            "saraland",
            "semmes",
            "theodore",
        ],
        heading: "Service Area",
        summary: "We serve the whole Mobile Bay area from our shop in midtown \
                  Mobile.",
        bullets: &[
            "Mobile, Saraland, Semmes, and Theodore",
            "Eastern Shore: Daphne, Spanish Fort, and Fairhope",
            "Surrounding communities within about 40 miles",
        ],
    },
    TopicRule {
        topic: Topic::Timeline,
        triggers: &["time", "how long", "duration", "schedule"],
        heading: "Project Timelines",
        summary: "Most projects finish faster than people expect, and we \
                  commit to a start date in writing.",
        bullets: &[
            "Single rooms: usually 1 to 2 days",
            "Whole-home interiors: 3 to 5 days",
            "Exteriors: 3 to 5 days, weather permitting",
            "Cabinet projects: about a week including shop time",
        ],
    },
    TopicRule {
        topic: Topic::Preparation,
        triggers: &["prep", "preparation", "ready", "before"],
        heading: "How We Prepare",
        summary: "Good prep is most of a lasting paint job, so we never skip \
                  it.",
        bullets: &[
            "Furniture moved and everything masked and covered",
            "Holes patched, surfaces sanded and primed",
            "Clean edges from careful taping, not steady hands alone",
            "Full cleanup at the end of every work day",
        ],
    },
    TopicRule {
        topic: Topic::Warranty,
        triggers: &["warranty", "guarantee", "quality"],
        heading: "Our Warranty",
        summary: "Every job is backed in writing, and we do not consider a \
                  project done until you sign off on a walkthrough.",
        bullets: &[
            "Two-year workmanship warranty on every project",
            "Premium paint lines with manufacturer warranties",
            "Final walkthrough before we call it finished",
            "Free touch-ups within the warranty window",
        ],
    },
    TopicRule {
        topic: Topic::Contact,
        triggers: &["contact", "call", "email", "phone"],
        heading: "Get In Touch",
        summary: "Reach us however suits you, and we will get back the same \
                  business day.",
        bullets: &[
            "Phone: (251) 555-0199",
            "Email: hello@bayfrontpainting.com",
            "Estimate form right here on the site",
            "Office hours: Monday to Saturday, 7am to 6pm",
        ],
    },
];

/// Read-only rule table shared across requests.
pub struct KnowledgeBase {
    rules: &'static [TopicRule],
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// First rule with any trigger contained in the lowercased question.
    pub fn match_rule(&self, question: &str) -> Option<&'static TopicRule> {
        let question = question.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| question.contains(t)))
    }

    /// Always answers: a matched topic's canned text, or the menu.
    pub fn answer(&self, question: &str) -> String {
        match self.match_rule(question) {
            Some(rule) => rule.compose(),
            None => format!("{}\n\n{}", MENU, CONTACT_FRAGMENT),
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
