//! Shared trip expenses example

use bigdecimal::BigDecimal;
use tripsplit_core::utils::{EnhancedExpenseValidator, MemoryStorage};
use tripsplit_core::{display_name, format_amount, ExpenseBook, MemberId};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🧳 Tripsplit Core - Shared Trip Expenses Example\n");

    let members: Vec<MemberId> = ["maya@example.com", "noah@example.com", "omar@example.com"]
        .into_iter()
        .map(MemberId::from_email)
        .collect();
    let (maya, noah, omar) = (members[0].clone(), members[1].clone(), members[2].clone());

    let mut book = ExpenseBook::with_validator(
        "kyoto-2024".to_string(),
        members.clone(),
        MemoryStorage::new(),
        Box::new(EnhancedExpenseValidator),
    );

    // 1. Record what everyone paid
    println!("💰 Recording Expenses...\n");

    book.record_shared_expense("Ryokan", BigDecimal::from(84000), Some("JPY"), maya.clone())
        .await?;
    println!("  ✓ Ryokan paid by {}", display_name(&maya));

    let rail_pass = book
        .expense("Rail passes", noah.clone())
        .amount(BigDecimal::from(150))
        .currency("EUR")
        .split_among([noah.clone(), omar.clone()])
        .created_by(noah.clone())
        .build()?;
    book.record_expense(rail_pass).await?;
    println!("  ✓ Rail passes paid by {}", display_name(&noah));

    let dinner = book
        .expense("Dinner", omar.clone())
        .amount(BigDecimal::from(100))
        .currency("EUR")
        .split_among(members.iter().cloned())
        .build()?;
    book.record_expense(dinner).await?;
    println!("  ✓ Dinner paid by {}", display_name(&omar));

    // Lena joins halfway; only expenses recorded from now on include her
    let lena = MemberId::from_email("Lena@Example.com");
    let mut roster = book.members().to_vec();
    roster.push(lena.clone());
    book.set_members(roster);
    book.record_shared_expense("Karaoke", BigDecimal::from(80), Some("EUR"), lena.clone())
        .await?;
    println!(
        "  ✓ Karaoke paid by {} ({} members on {})",
        display_name(&lena),
        book.members().len(),
        book.trip_id()
    );

    // 2. A split with nobody in it never reaches the book
    let rejected = book
        .expense("Snacks", maya.clone())
        .amount(BigDecimal::from(12))
        .build();
    if let Err(err) = rejected {
        println!("  ✗ Snacks rejected: {}", err);
    }

    // 3. Totals, balances and who owes whom
    let summary = book.summary().await?;

    println!("\n📊 Totals:");
    let mut totals: Vec<_> = summary.totals.iter().collect();
    totals.sort_by(|a, b| a.0.cmp(b.0));
    for (currency, total) in totals {
        println!("  {}", format_amount(total, currency));
    }

    println!("\n💸 Who Owes Whom:");
    for (currency, settlements) in summary.outstanding() {
        println!("  {}:", currency);
        for settlement in settlements {
            println!(
                "    {} owes {} {}",
                display_name(&settlement.from),
                display_name(&settlement.to),
                format_amount(&settlement.amount, currency)
            );
        }
    }

    if summary.is_settled() {
        println!("  Everyone is settled up ✅");
    }

    Ok(())
}
