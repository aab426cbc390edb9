use paper_assistant::{render, Session};

// Usage: cargo run --example ask -- <paper.pdf> "<question>"
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(question)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: ask <paper.pdf> <question>");
    };

    let session = Session::from_env();
    println!("🔍 Research Paper Assistant at {}", session.base_url());

    match session.health().await {
        Ok(health) => println!("Status: {} ({})", health.status, health.message),
        Err(e) => println!("Health check failed: {}", e),
    }

    println!("\n📄 Uploading {}", path);
    session.choose_file(&path).await?;
    let document = session.upload().await?;
    print!("{}", render::document_card(&document));

    println!("\n❓ {}", question);
    let record = session.ask_question(question).await?;
    print!("{}", render::answer_card(&record.answer));

    println!("\n✅ Done");
    Ok(())
}
