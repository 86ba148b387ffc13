use serde::{Deserialize, Serialize};

/// Root of the coaching hierarchy for one company. Loaded once per session
/// and treated as immutable afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub company_name: String,
    #[serde(default)]
    pub practitioners: Vec<Practitioner>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Practitioner {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Declared headcount reported by the backend. Intentionally independent
    /// of `members.len()`: rosters may arrive truncated while the count
    /// stays authoritative, so it must never be derived from the list.
    pub member_count: u32,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub goal: String,
    #[serde(default)]
    pub progress: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

impl PlanPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "per month",
            Self::Quarterly => "per quarter",
            Self::Yearly => "per year",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPlan {
    pub id: String,
    pub name: String,
    pub price_cents: u32,
    pub period: PlanPeriod,
    #[serde(default)]
    pub features: Vec<String>,
    /// Marks the tier the catalog wants visually emphasized.
    #[serde(default)]
    pub highlighted: bool,
}

impl SubscriptionPlan {
    pub fn price_label(&self) -> String {
        let euros = self.price_cents / 100;
        let cents = self.price_cents % 100;
        if cents == 0 {
            format!("€{euros}")
        } else {
            format!("€{euros}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_drops_zero_cents() {
        let plan = SubscriptionPlan {
            id: "basic".into(),
            name: "Basic".into(),
            price_cents: 1900,
            period: PlanPeriod::Monthly,
            features: Vec::new(),
            highlighted: false,
        };
        assert_eq!(plan.price_label(), "€19");
    }

    #[test]
    fn price_label_keeps_fractional_cents() {
        let plan = SubscriptionPlan {
            id: "pro".into(),
            name: "Pro".into(),
            price_cents: 2950,
            period: PlanPeriod::Yearly,
            features: Vec::new(),
            highlighted: true,
        };
        assert_eq!(plan.price_label(), "€29.50");
        assert_eq!(plan.period.label(), "per year");
    }

    #[test]
    fn organization_deserializes_with_missing_collections() {
        let org: Organization =
            serde_json::from_str(r#"{"company_name":"Acme Health"}"#).expect("parse");
        assert_eq!(org.company_name, "Acme Health");
        assert!(org.practitioners.is_empty());
    }
}
