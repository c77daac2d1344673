//! Integration tests for tripsplit-core

use bigdecimal::BigDecimal;
use tripsplit_core::{
    apply_settlements, balance_total, compute_balances, compute_settlements, format_amount,
    round_to_cents,
    utils::{EnhancedExpenseValidator, MemoryStorage},
    Expense, ExpenseBook, MemberId, Settlement, SplitError,
};

fn member(id: &str) -> MemberId {
    MemberId::from(id)
}

fn epsilon() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

fn expense(amount: i64, currency: &str, paid_by: &str, split: &[&str]) -> Expense {
    Expense::new(
        "trip".to_string(),
        "Expense".to_string(),
        BigDecimal::from(amount),
        Some(currency.to_string()),
        member(paid_by),
        split.iter().map(|m| member(m)).collect(),
    )
}

#[test]
fn test_three_way_dinner_scenario() {
    let members = vec![member("A"), member("B"), member("C")];
    let balances = compute_balances(&[expense(100, "EUR", "A", &["A", "B", "C"])], &members);
    let eur = &balances["EUR"];

    assert_eq!(round_to_cents(&eur[&member("A")]), "66.67".parse::<BigDecimal>().unwrap());
    assert_eq!(round_to_cents(&eur[&member("B")]), "-33.33".parse::<BigDecimal>().unwrap());
    assert_eq!(round_to_cents(&eur[&member("C")]), "-33.33".parse::<BigDecimal>().unwrap());

    let settlements = compute_settlements(eur);
    assert_eq!(settlements.len(), 2);
    assert!(settlements.iter().all(|s| s.to == member("A")));
    assert_eq!(settlements[0].from, member("B"));
    assert_eq!(settlements[1].from, member("C"));
    assert!(settlements
        .iter()
        .all(|s| format_amount(&s.amount, "EUR") == "€ 33.33"));

    let received: BigDecimal = settlements.iter().map(|s| &s.amount).sum();
    assert!(received >= "66.66".parse::<BigDecimal>().unwrap());
    assert!(received <= "66.67".parse::<BigDecimal>().unwrap());
}

#[test]
fn test_multi_currency_settled_independently() {
    let members = vec![member("A"), member("B"), member("C")];
    let expenses = vec![
        expense(90, "EUR", "A", &["A", "B", "C"]),
        expense(60, "USD", "B", &["A", "B"]),
        expense(30, "EUR", "C", &["A", "C"]),
    ];
    let balances = compute_balances(&expenses, &members);
    assert_eq!(balances.len(), 2);

    for (currency, currency_balances) in &balances {
        assert!(
            balance_total(currency_balances).abs() <= epsilon(),
            "{currency} balances do not sum to zero"
        );

        let settlements = compute_settlements(currency_balances);
        let remaining = apply_settlements(currency_balances, &settlements);
        assert!(remaining.values().all(|b| b.abs() <= epsilon()));
    }

    // EUR: A +60 -15 = 45, B -30, C -30 +30 -15 = -15
    let eur = compute_settlements(&balances["EUR"]);
    assert_eq!(
        eur,
        vec![
            Settlement::new(member("B"), member("A"), BigDecimal::from(30)),
            Settlement::new(member("C"), member("A"), BigDecimal::from(15)),
        ]
    );

    let usd = compute_settlements(&balances["USD"]);
    assert_eq!(
        usd,
        vec![Settlement::new(member("A"), member("B"), BigDecimal::from(30))]
    );
}

#[test]
fn test_missing_currency_joins_baseline_bucket() {
    let members = vec![member("A"), member("B")];
    let mut untagged = expense(10, "EUR", "A", &["A", "B"]);
    untagged.currency = None;
    let expenses = vec![untagged, expense(10, "EUR", "A", &["A", "B"])];

    let balances = compute_balances(&expenses, &members);
    assert_eq!(balances.len(), 1);
    assert_eq!(balances["EUR"][&member("B")], BigDecimal::from(-10));
}

#[tokio::test]
async fn test_complete_trip_workflow() {
    let members: Vec<MemberId> = ["ana@trip.com", "ben@trip.com", "cy@trip.com"]
        .into_iter()
        .map(MemberId::from_email)
        .collect();
    let mut book = ExpenseBook::with_validator(
        "porto".to_string(),
        members.clone(),
        MemoryStorage::new(),
        Box::new(EnhancedExpenseValidator),
    );

    let hotel = book
        .record_shared_expense("Hotel", BigDecimal::from(300), Some("EUR"), members[0].clone())
        .await
        .unwrap();

    let taxi = book
        .expense("Taxi", members[1].clone())
        .amount(BigDecimal::from(40))
        .currency("EUR")
        .split_among([members[1].clone(), members[2].clone()])
        .created_by(members[1].clone())
        .build()
        .unwrap();
    let taxi = book.record_expense(taxi).await.unwrap();

    let souvenirs = book
        .expense("Souvenirs", members[2].clone())
        .amount(BigDecimal::from(25))
        .currency("USD")
        .split_with(members[0].clone())
        .build()
        .unwrap();
    book.record_expense(souvenirs).await.unwrap();

    assert_eq!(book.list_expenses().await.unwrap().len(), 3);

    let summary = book.summary().await.unwrap();
    assert_eq!(summary.totals["EUR"], BigDecimal::from(340));
    assert_eq!(summary.totals["USD"], BigDecimal::from(25));
    assert_eq!(summary.outstanding().len(), 2);

    // ana: +300 -100 = 200, ben: -100 +40 -20 = -80, cy: -100 -20 = -120
    assert_eq!(
        summary.settlements["EUR"],
        vec![
            Settlement::new(members[2].clone(), members[0].clone(), BigDecimal::from(120)),
            Settlement::new(members[1].clone(), members[0].clone(), BigDecimal::from(80)),
        ]
    );

    // Ben now covers the taxi alone
    let mut edited = taxi.clone();
    edited.split_among = vec![members[1].clone()];
    let edited = book.update_expense(edited).await.unwrap();
    assert_eq!(edited.created_at, taxi.created_at);
    assert_eq!(edited.created_by, Some(members[1].clone()));

    let summary = book.summary().await.unwrap();
    assert_eq!(summary.totals["EUR"], BigDecimal::from(340));
    assert_eq!(summary.balances["EUR"][&members[1]], BigDecimal::from(-100));
    assert_eq!(summary.balances["EUR"][&members[2]], BigDecimal::from(-100));

    book.delete_expense(&hotel.id).await.unwrap();
    let summary = book.summary().await.unwrap();
    assert!(summary.settlements["EUR"].is_empty());
    assert!(!summary.is_settled());
}

#[tokio::test]
async fn test_expense_validation_at_entry() {
    let members = vec![member("a@x.com"), member("b@x.com")];
    let mut book = ExpenseBook::with_validator(
        "trip".to_string(),
        members,
        MemoryStorage::new(),
        Box::new(EnhancedExpenseValidator),
    );

    let empty_split = expense(10, "EUR", "a@x.com", &[]);
    assert!(matches!(
        book.record_expense(empty_split).await,
        Err(SplitError::EmptySplit)
    ));

    let outsider = expense(10, "EUR", "a@x.com", &["a@x.com", "z@x.com"]);
    assert!(matches!(
        book.record_expense(outsider).await,
        Err(SplitError::UnknownMember(m)) if m == "z@x.com"
    ));

    let negative = expense(-10, "EUR", "a@x.com", &["b@x.com"]);
    assert!(matches!(
        book.record_expense(negative).await,
        Err(SplitError::InvalidAmount(_))
    ));

    // Nothing rejected reaches storage
    assert!(book.list_expenses().await.unwrap().is_empty());

    let ghost = expense(10, "EUR", "a@x.com", &["b@x.com"]);
    assert!(matches!(
        book.update_expense(ghost.clone()).await,
        Err(SplitError::ExpenseNotFound(_))
    ));
    assert!(matches!(
        book.delete_expense(&ghost.id).await,
        Err(SplitError::ExpenseNotFound(_))
    ));
}

#[test]
fn test_summary_serializes_to_json() {
    let members = vec![member("A"), member("B")];
    let summary =
        tripsplit_core::TripSummary::from_expenses(&[expense(10, "GBP", "A", &["B"])], &members);

    let json = serde_json::to_value(&summary).unwrap();
    let settlement = &json["settlements"]["GBP"][0];
    assert_eq!(settlement["from"], "B");
    assert_eq!(settlement["to"], "A");
}
