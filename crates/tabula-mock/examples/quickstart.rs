//! Build a mock connection from config, create a table through a querier,
//! write two rows, and read them back.
//!
//! Run with: `TABULA_LOG=tabula=debug cargo run -p tabula-mock --example quickstart`

use tabula_core::tracing::init_tracing_with;
use tabula_core::traits::Table;
use tabula_core::types::{Assignment, Attribute, DataType, Schema};
use tabula_core::{with_querier, TabulaConfig, TabulaResult};
use tabula_mock::MockConnection;

fn main() -> TabulaResult<()> {
    let config = TabulaConfig::load(None)?;
    init_tracing_with(&config.logging);

    let mut conn = MockConnection::from_config(&config.connection)?;
    let schema = Schema::new(vec![
        Attribute::required("id", DataType::Integer),
        Attribute::required("name", DataType::String),
        Attribute::optional("nickname", DataType::String),
    ])?;

    let names = with_querier(&mut conn, |q| -> TabulaResult<_> {
        let people = q.create("people", schema)?;
        people.set(&[Assignment::new("id", 1), Assignment::new("name", "Ann")])?;
        people.set(&[
            Assignment::new("id", 2),
            Assignment::new("name", "Bob"),
            Assignment::new("nickname", "Bobby"),
        ])?;

        let people = q.lookup("people")?;
        Ok(people.get(&vec!["name", "nickname"].into())?)
    })?;

    println!("{names:?}");
    Ok(())
}
