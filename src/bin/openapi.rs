use anyhow::Result;

fn main() -> Result<()> {
    let doc = legal_ledger::ledger::openapi();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
