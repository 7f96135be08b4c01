use chrono::Duration;
use daylimit_core::{
    CaloriesCalculator, CashCalculator, CashStatus, Currency, Locale, Record, Tracker,
};

fn record(amount: f64, comment: &str, date: Option<&str>) -> Record {
    let built = Record::new(amount, comment, date);
    assert!(built.is_ok(), "record `{comment}` should build");
    match built {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

#[test]
fn calories_advice_ignores_past_records() {
    let cookie = record(439.0, "very tasty cookie", None);
    let juice = record(30.0, "juice", Some("26.08.2021"));
    let today = cookie.date();

    let mut calculator = CaloriesCalculator::new(1800.0);
    calculator.add_record(cookie);
    calculator.add_record(juice);

    assert_eq!(calculator.today_stats_on(today), 439.0);
    let advice = calculator.calories_remained_on(today, Locale::En);
    assert!(advice.contains("1361"));
    assert!(!advice.contains("1361."));
}

#[test]
fn cash_left_is_reported_in_roubles() {
    let latte = record(150.0, "matcha latte", None);
    let debt = record(2000.0, "debt to sister", Some("01.10.2021"));
    let today = latte.date();

    let mut calculator = CashCalculator::new(1000.0);
    calculator.add_record(latte);
    calculator.add_record(debt);

    assert_eq!(calculator.remained_on(today), 850.0);
    let message = calculator.today_cash_remained_on(today, "rub", Locale::En);
    assert_eq!(message.ok().as_deref(), Some("Left for today: 850.00 RUB"));
}

#[test]
fn unknown_currency_is_a_hard_failure() {
    let mut calculator = CashCalculator::new(1000.0);
    let spent = record(1.0, "gum", None);
    let today = spent.date();
    calculator.add_record(spent);

    let result = calculator.today_cash_remained_on(today, "xyz", Locale::En);
    assert!(result.is_err());
    if let Err(error) = result {
        assert_eq!(error.code, "unknown_currency");
        assert!(error.message.contains("xyz"));
    }
}

#[test]
fn zero_balance_beats_currency_validation() {
    let mut calculator = CashCalculator::new(300.0);
    let spent = record(300.0, "groceries", None);
    let today = spent.date();
    calculator.add_record(spent);

    assert_eq!(
        calculator.cash_status_on(today, "xyz").ok(),
        Some(CashStatus::Exhausted)
    );
    assert_eq!(
        calculator.cash_status_on(today, "usd").ok(),
        Some(CashStatus::Exhausted)
    );
}

#[test]
fn week_includes_today_and_drops_eight_days_back() {
    let fresh = record(5.0, "today", None);
    let today = fresh.date();
    let stale = Record::dated(50.0, "eight days back", today - Duration::days(8));
    let edge = Record::dated(500.0, "seven days back", today - Duration::days(7));
    let inside = Record::dated(0.5, "six days back", today - Duration::days(6));

    let mut calculator = CashCalculator::new(100.0);
    for entry in [fresh, stale, edge, inside] {
        calculator.add_record(entry);
    }

    assert_eq!(calculator.week_stats_on(today), 5.5);
    assert_eq!(calculator.week_stats_on(today), calculator.week_stats_on(today));
}

#[test]
fn one_record_can_feed_several_calculators() {
    let shared = record(200.0, "shared lunch", None);
    let today = shared.date();

    let mut calories = CaloriesCalculator::new(1000.0);
    let mut cash = CashCalculator::new(1000.0);
    calories.add_record(shared.clone());
    cash.add_record(shared);

    assert_eq!(calories.remained_on(today), 800.0);
    assert_eq!(
        cash.cash_status_on(today, "usd").ok(),
        Some(CashStatus::Left {
            amount: 800.0 / 60.0,
            currency: Currency::Usd,
        })
    );
}

#[test]
fn wall_clock_queries_match_explicit_reference_date() {
    let mut calculator = CaloriesCalculator::new(1800.0);
    let cookie = record(439.0, "very tasty cookie", None);
    let today = cookie.date();
    calculator.add_record(cookie);

    if daylimit_core::date::local_today() == today {
        assert_eq!(calculator.today_stats(), calculator.today_stats_on(today));
        assert_eq!(calculator.week_stats(), calculator.week_stats_on(today));
        assert_eq!(calculator.remained(), 1361.0);
    }
}
