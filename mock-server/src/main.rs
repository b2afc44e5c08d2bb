use mock_server::{Position, Vehicle};
use tokio::net::TcpListener;

fn sample_vehicles() -> Vec<Vehicle> {
    let vehicle = |id, shortcode: &str, battery, latitude, longitude| Vehicle {
        id,
        shortcode: shortcode.to_string(),
        battery,
        position: Position {
            latitude,
            longitude,
        },
    };
    vec![
        vehicle(1, "abcd", 87.0, 52.520008, 13.404954),
        vehicle(2, "efgh", 42.5, 48.137154, 11.576124),
        vehicle(3, "ijkl", 9.0, 53.551086, 9.993682),
    ]
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run_with_vehicles(listener, sample_vehicles()).await
}
