#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    po_docgen_server::run().await?;
    Ok(())
}
