use coordkit::api::create_router;

#[tokio::main]
async fn main() {
    let app = create_router();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind port");

    println!("🌐 coordkit API Server");
    println!("📡 Listening on http://0.0.0.0:3000");
    println!();
    println!("📍 Endpoints:");
    println!("  GET  /api/position?latitude=<lat>&longitude=<lon>");
    println!("  GET  /api/search?q=<query>");
    println!();

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
