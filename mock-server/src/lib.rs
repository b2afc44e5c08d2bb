use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub shortcode: String,
    pub battery: f64,
    pub position: Position,
}

/// Body of `POST /vehicles` and `PUT /vehicles/{id}`; the server owns ids.
#[derive(Debug, Deserialize)]
pub struct VehicleInput {
    pub shortcode: String,
    pub battery: f64,
    pub position: Position,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleList {
    pub vehicles: Vec<Vehicle>,
}

pub type Db = Arc<RwLock<BTreeMap<i64, Vehicle>>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    app_with_vehicles(Vec::new())
}

pub fn app_with_vehicles(vehicles: Vec<Vehicle>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        vehicles.into_iter().map(|v| (v.id, v)).collect(),
    ));
    Router::new()
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/vehicles/{id}", put(update_vehicle).delete(delete_vehicle))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_vehicles(listener, Vec::new()).await
}

pub async fn run_with_vehicles(
    listener: TcpListener,
    vehicles: Vec<Vehicle>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_vehicles(vehicles)).await
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| error(StatusCode::BAD_REQUEST, "Invalid vehicle id"))
}

async fn list_vehicles(State(db): State<Db>) -> Json<VehicleList> {
    let vehicles = db.read().await;
    Json(VehicleList {
        vehicles: vehicles.values().cloned().collect(),
    })
}

async fn create_vehicle(
    State(db): State<Db>,
    Json(input): Json<VehicleInput>,
) -> (StatusCode, Json<Vehicle>) {
    let mut vehicles = db.write().await;
    let id = vehicles.keys().next_back().map_or(1, |last| last + 1);
    let vehicle = Vehicle {
        id,
        shortcode: input.shortcode,
        battery: input.battery,
        position: input.position,
    };
    vehicles.insert(id, vehicle.clone());
    (StatusCode::CREATED, Json(vehicle))
}

async fn update_vehicle(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<VehicleInput>,
) -> ApiResult<Json<Vehicle>> {
    let id = parse_id(&id)?;
    let mut vehicles = db.write().await;
    let vehicle = vehicles
        .get_mut(&id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Vehicle not found"))?;
    vehicle.shortcode = input.shortcode;
    vehicle.battery = input.battery;
    vehicle.position = input.position;
    Ok(Json(vehicle.clone()))
}

async fn delete_vehicle(State(db): State<Db>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let mut vehicles = db.write().await;
    vehicles
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Vehicle not found"))
}
