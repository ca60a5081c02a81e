//! DeepCAL Engine - Freight forwarder ranking
//!
//! Weights decision criteria with neutrosophic AHP, ranks forwarders with
//! TOPSIS, validates every run and keeps an audit trail of validated
//! decisions. Delivery feedback flags forwarders whose failures pile up.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
