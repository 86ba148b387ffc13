use crate::models::{PlanPeriod, SubscriptionPlan};

/// The four-tier catalog shown on the plan selection page. Static by design;
/// plans change with releases, not at runtime.
pub fn plan_catalog() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            id: "starter".to_string(),
            name: "Starter".to_string(),
            price_cents: 900,
            period: PlanPeriod::Monthly,
            features: vec![
                "Workout library".to_string(),
                "Weekly progress check-in".to_string(),
            ],
            highlighted: false,
        },
        SubscriptionPlan {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price_cents: 1900,
            period: PlanPeriod::Monthly,
            features: vec![
                "Everything in Starter".to_string(),
                "Personal meal plan".to_string(),
                "Chat with your dietitian".to_string(),
            ],
            highlighted: false,
        },
        SubscriptionPlan {
            id: "pro".to_string(),
            name: "Pro".to_string(),
            price_cents: 3900,
            period: PlanPeriod::Monthly,
            features: vec![
                "Everything in Basic".to_string(),
                "1:1 video coaching".to_string(),
                "Team challenges".to_string(),
            ],
            highlighted: true,
        },
        SubscriptionPlan {
            id: "elite-yearly".to_string(),
            name: "Elite".to_string(),
            price_cents: 34900,
            period: PlanPeriod::Yearly,
            features: vec![
                "Everything in Pro".to_string(),
                "Quarterly lab review".to_string(),
                "Priority support".to_string(),
            ],
            highlighted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_tiers_with_unique_ids() {
        let plans = plan_catalog();
        assert_eq!(plans.len(), 4);
        let mut ids: Vec<_> = plans.iter().map(|plan| plan.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn exactly_one_tier_is_highlighted() {
        let highlighted = plan_catalog().iter().filter(|plan| plan.highlighted).count();
        assert_eq!(highlighted, 1);
    }
}
