//! Business logic services

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod payment;

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::config::AppConfig;

/// Source of "today", injectable so date-sensitive logic (card expiry,
/// calendar initialization) is testable with a pinned date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub payment: payment::PaymentService,
    config: AppConfig,
    clock: Arc<dyn Clock>,
}

impl Services {
    /// Create all services with the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(),
            payment: payment::PaymentService::new(clock.clone()),
            config,
            clock,
        }
    }

    /// Start a booking configurator seeded from today's date and the
    /// configured booking defaults.
    pub fn new_booking(&self) -> booking::BookingConfigurator {
        booking::BookingConfigurator::new(&self.config.booking, self.clock.today())
    }

    /// Confirmation details with the payment summary recomputed from the
    /// configured service fee.
    pub fn confirmation_details(&self) -> crate::models::BookingDetails {
        let mut details = crate::models::BookingDetails::default();
        details.payment.service_fee = self.config.payment.service_fee;
        details.payment.total = details.payment.subtotal + self.config.payment.service_fee;
        details
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
