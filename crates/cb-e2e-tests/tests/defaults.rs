//! E2E tests for downstream defaults applied to validated messages.

mod helpers;

use cb_nlu::{DateScope, Outcome, ResolvedQuery};
use chrono::NaiveDate;

use helpers::{TestHarness, today};

async fn resolve(text: &str) -> ResolvedQuery {
    let h = TestHarness::new();
    match h.understand(text).await.outcome {
        Outcome::Ready(message) => message.resolve(today()),
        other => panic!("{text:?} not ready: {other:?}"),
    }
}

/// Cumulative count without a date is "as of today".
#[tokio::test]
async fn e2e_cumulative_defaults_to_today() {
    let q = resolve(helpers::VACCINATED_UK_SO_FAR).await;
    assert_eq!(q.date, DateScope::Day { date: today() });
    assert_eq!(q.location, "united kingdom");
    assert_eq!(q.location_label(), "the united kingdom");
}

/// An extreme over days without a date covers the whole series.
#[tokio::test]
async fn e2e_extreme_defaults_to_all_time_and_world() {
    let q = resolve(helpers::MOST_VACCINATED_DAY).await;
    assert_eq!(q.date, DateScope::AllTime);
    assert_eq!(q.location, "germany");
}

/// A relative range is resolved against the reference date.
#[tokio::test]
async fn e2e_last_week_resolves_to_monday_through_sunday() {
    let q = resolve(helpers::FEWEST_INFECTIONS).await;
    assert_eq!(
        q.date,
        DateScope::Range {
            start: NaiveDate::from_ymd_opt(2021, 3, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
        }
    );
    assert_eq!(q.location_label(), "the world");
}

/// A daily number with an explicit day keeps that day.
#[tokio::test]
async fn e2e_explicit_day_is_kept() {
    let q = resolve(helpers::GOT_COVID_YESTERDAY).await;
    assert_eq!(
        q.date,
        DateScope::Day {
            date: NaiveDate::from_ymd_opt(2021, 3, 16).unwrap()
        }
    );
}

/// "this year" runs from January 1st to the reference date.
#[tokio::test]
async fn e2e_this_year_resolves_to_year_to_date() {
    let q = resolve(helpers::GERMAN_CASES_THIS_YEAR).await;
    assert_eq!(
        q.date,
        DateScope::Range {
            start: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            end: today(),
        }
    );
    assert_eq!(q.location, "germany");
}

/// "this week" starts on the Monday of the reference week.
#[tokio::test]
async fn e2e_this_week_resolves_to_week_to_date() {
    let q = resolve(helpers::VACCINATED_THIS_WEEK).await;
    assert_eq!(
        q.date,
        DateScope::Range {
            start: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            end: today(),
        }
    );
}
