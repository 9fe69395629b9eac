use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::{
    AddressProvider, AvailabilityProvider, BookingEndpoint, CatalogProvider, PaymentGateway,
};

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub catalog: Box<dyn CatalogProvider>,
    pub addresses: Box<dyn AddressProvider>,
    pub availability: Box<dyn AvailabilityProvider>,
    pub bookings: Box<dyn BookingEndpoint>,
    pub payments: Box<dyn PaymentGateway>,
}
