use rag_client::{QueryService, DEFAULT_TOP_K};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let service = QueryService::from_env();

    println!("🔍 Testing Socrates RAG client");

    println!("\n📋 Backend probe:");
    println!("reachable: {}", service.probe().await);

    println!("\n🔍 Query:");
    let result = service
        .query("What are the main topics covered in the documents?", DEFAULT_TOP_K)
        .await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    println!("\n✅ Client test completed!");
    Ok(())
}
