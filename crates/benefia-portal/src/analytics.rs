//! Derived benefit analytics.
//!
//! Every aggregate here is a linear, entry-wise sum of
//! [`BenefitValue::annual_value`] — no cross-entry interaction. The
//! annualization convention (day × 220, month × 12, year and one-time at
//! face value) is applied identically to the portfolio total and the
//! per-category distribution.

use std::collections::{BTreeMap, HashMap};

use benefia_core::models::benefit::{Benefit, BenefitCategory, BenefitStatus};
use benefia_core::models::customer::ServiceRequestPoint;
use benefia_core::models::group::OptionalBenefitGroup;
use benefia_core::models::selection::BenefitSelection;
use benefia_core::Locale;

/// Annual value and count for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub category: BenefitCategory,
    pub count: usize,
    pub total_annual_value: f64,
}

/// Selection counts for one option of an optional benefit group.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionUptake {
    pub option_id: uuid::Uuid,
    pub option_name: String,
    pub count: usize,
    /// Share of all selections across the group's options, 0..=100.
    pub percentage: f64,
}

/// One month of service-request volume, aggregated from the dossier's
/// daily seed points.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrendPoint {
    /// Month key, "YYYY-MM".
    pub month: String,
    pub request_count: u32,
    pub avg_resolution_hours: f64,
}

/// Computed analytics snapshot over the current catalog and selections.
#[derive(Debug, Clone, PartialEq)]
pub struct BenefitAnalytics {
    pub total_employees: u32,
    pub total_annual_cost: f64,
    pub average_benefit_value: f64,
    pub participation_rate: f64,
    pub distribution: Vec<CategoryBreakdown>,
    pub option_uptake: Vec<OptionUptake>,
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

/// Sum of annualized values over a slice. Linear: the total over a
/// concatenation equals the sum of the parts.
pub fn total_annual_value(benefits: &[Benefit]) -> f64 {
    benefits.iter().map(|b| b.value.annual_value()).sum()
}

/// Per-category annualized totals, in [`BenefitCategory::ALL`] order.
/// Categories with no benefits are omitted.
pub fn category_distribution(benefits: &[Benefit]) -> Vec<CategoryBreakdown> {
    let mut totals: HashMap<BenefitCategory, (usize, f64)> = HashMap::new();
    for benefit in benefits {
        let entry = totals.entry(benefit.category).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += benefit.value.annual_value();
    }
    BenefitCategory::ALL
        .iter()
        .filter_map(|category| {
            totals.get(category).map(|&(count, total)| CategoryBreakdown {
                category: *category,
                count,
                total_annual_value: total,
            })
        })
        .collect()
}

/// Per-option selection counts across the given groups.
pub fn option_uptake(
    groups: &[OptionalBenefitGroup],
    selections: &[BenefitSelection],
) -> Vec<OptionUptake> {
    let total = selections.len();
    let mut uptake = Vec::new();
    for group in groups {
        for option in &group.options {
            let count = selections
                .iter()
                .filter(|s| s.selected_option_id == option.id)
                .count();
            uptake.push(OptionUptake {
                option_id: option.id,
                option_name: option.name.localize(Locale::Fi).to_string(),
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                },
            });
        }
    }
    uptake
}

/// Service-request volume per calendar month, chronologically ordered.
/// Resolution hours are averaged weighted by request count.
pub fn monthly_trend(points: &[ServiceRequestPoint]) -> Vec<MonthlyTrendPoint> {
    let mut months: BTreeMap<String, (u32, f64)> = BTreeMap::new();
    for point in points {
        let entry = months
            .entry(point.date.format("%Y-%m").to_string())
            .or_insert((0, 0.0));
        entry.0 += point.count;
        entry.1 += point.avg_resolution_hours * f64::from(point.count);
    }
    months
        .into_iter()
        .map(|(month, (count, weighted_hours))| MonthlyTrendPoint {
            month,
            request_count: count,
            avg_resolution_hours: if count == 0 {
                0.0
            } else {
                weighted_hours / f64::from(count)
            },
        })
        .collect()
}

impl BenefitAnalytics {
    /// Aggregate the snapshot the admin dashboard renders.
    ///
    /// Only active benefits count toward totals and the distribution;
    /// drafts and archived entries are catalog bookkeeping, not cost.
    pub fn compute(
        benefits: &[Benefit],
        groups: &[OptionalBenefitGroup],
        selections: &[BenefitSelection],
        service_requests: &[ServiceRequestPoint],
        total_employees: u32,
    ) -> Self {
        let active: Vec<Benefit> = benefits
            .iter()
            .filter(|b| b.status == BenefitStatus::Active)
            .cloned()
            .collect();
        let total_annual_cost = total_annual_value(&active);
        let average_benefit_value = if active.is_empty() {
            0.0
        } else {
            total_annual_cost / active.len() as f64
        };
        let participation_rate = if total_employees == 0 {
            0.0
        } else {
            selections.len() as f64 / f64::from(total_employees) * 100.0
        };
        Self {
            total_employees,
            total_annual_cost,
            average_benefit_value,
            participation_rate,
            distribution: category_distribution(&active),
            option_uptake: option_uptake(groups, selections),
            monthly_trend: monthly_trend(service_requests),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benefia_core::models::benefit::{BenefitKind, BenefitValue, ValueUnit};
    use benefia_core::LocalizedString;
    use chrono::Utc;
    use uuid::Uuid;

    fn benefit(category: BenefitCategory, amount: f64, unit: ValueUnit) -> Benefit {
        let now = Utc::now();
        Benefit {
            id: Uuid::new_v4(),
            kind: BenefitKind::Standard,
            name: LocalizedString::finnish("Etu"),
            description: "kuvaus".into(),
            category,
            value: BenefitValue::new(amount, unit),
            status: BenefitStatus::Active,
            valid_from: now.date_naive(),
            valid_to: None,
            icon: None,
            external_link: None,
            target_groups: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn total_applies_unit_conventions() {
        let benefits = vec![
            benefit(BenefitCategory::Lunch, 10.0, ValueUnit::Day), // 2200
            benefit(BenefitCategory::Phone, 20.0, ValueUnit::Month), // 240
            benefit(BenefitCategory::Sports, 400.0, ValueUnit::Year), // 400
            benefit(BenefitCategory::Wellbeing, 35.0, ValueUnit::OneTime), // 35
        ];
        assert_eq!(total_annual_value(&benefits), 2875.0);
    }

    #[test]
    fn total_is_linear_over_concatenation() {
        let a = vec![benefit(BenefitCategory::Lunch, 10.0, ValueUnit::Day)];
        let b = vec![
            benefit(BenefitCategory::Phone, 20.0, ValueUnit::Month),
            benefit(BenefitCategory::Sports, 400.0, ValueUnit::Year),
        ];
        let combined: Vec<Benefit> = a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(
            total_annual_value(&combined),
            total_annual_value(&a) + total_annual_value(&b)
        );
    }

    #[test]
    fn distribution_groups_by_category() {
        let benefits = vec![
            benefit(BenefitCategory::Sports, 400.0, ValueUnit::Year),
            benefit(BenefitCategory::Sports, 100.0, ValueUnit::Year),
            benefit(BenefitCategory::Lunch, 10.0, ValueUnit::Day),
        ];
        let distribution = category_distribution(&benefits);
        assert_eq!(distribution.len(), 2);
        // ALL order puts lunch first.
        assert_eq!(distribution[0].category, BenefitCategory::Lunch);
        assert_eq!(distribution[0].total_annual_value, 2200.0);
        assert_eq!(distribution[1].category, BenefitCategory::Sports);
        assert_eq!(distribution[1].count, 2);
        assert_eq!(distribution[1].total_annual_value, 500.0);
    }

    #[test]
    fn snapshot_counts_only_active_benefits() {
        let mut draft = benefit(BenefitCategory::Lunch, 10.0, ValueUnit::Day);
        draft.status = BenefitStatus::Draft;
        let benefits = vec![
            benefit(BenefitCategory::Phone, 20.0, ValueUnit::Month),
            draft,
        ];
        let snapshot = BenefitAnalytics::compute(&benefits, &[], &[], &[], 50);
        assert_eq!(snapshot.total_annual_cost, 240.0);
        assert_eq!(snapshot.average_benefit_value, 240.0);
        assert_eq!(snapshot.distribution.len(), 1);
    }

    #[test]
    fn empty_inputs_produce_zeroes() {
        let snapshot = BenefitAnalytics::compute(&[], &[], &[], &[], 0);
        assert_eq!(snapshot.total_annual_cost, 0.0);
        assert_eq!(snapshot.average_benefit_value, 0.0);
        assert_eq!(snapshot.participation_rate, 0.0);
        assert!(snapshot.distribution.is_empty());
        assert!(snapshot.monthly_trend.is_empty());
    }

    fn request_point(year: i32, month: u32, day: u32, count: u32, hours: f64) -> ServiceRequestPoint {
        ServiceRequestPoint {
            date: chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            count,
            avg_resolution_hours: hours,
        }
    }

    #[test]
    fn trend_groups_points_by_month_in_order() {
        let points = vec![
            request_point(2024, 2, 10, 6, 4.0),
            request_point(2024, 1, 5, 10, 8.0),
            request_point(2024, 1, 20, 2, 2.0),
        ];
        let trend = monthly_trend(&points);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].month, "2024-01");
        assert_eq!(trend[0].request_count, 12);
        // Weighted average: (10*8 + 2*2) / 12.
        assert_eq!(trend[0].avg_resolution_hours, 7.0);
        assert_eq!(trend[1].month, "2024-02");
        assert_eq!(trend[1].request_count, 6);
    }

    #[test]
    fn snapshot_carries_the_monthly_trend() {
        let points = vec![request_point(2024, 3, 1, 4, 5.0)];
        let snapshot = BenefitAnalytics::compute(&[], &[], &[], &points, 10);
        assert_eq!(snapshot.monthly_trend.len(), 1);
        assert_eq!(snapshot.monthly_trend[0].month, "2024-03");
    }
}
