//! Credit Scoring Dashboard Library
//!
//! This library backs a credit-scoring dashboard service: it collects a
//! client's application data through form sessions, sends the record to a
//! remote scoring API and renders the result as dashboard view models.
//!
//! # Modules
//!
//! - `api`: HTTP-facing components.
//! - `core`: Form, rendering and domain models.
//! - `integrations`: Scoring API client and reference data.
//! - `comparison`: Population comparison plots.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `form`: Form sessions, validation and prefill.
//! - `glossary`: Human-readable feature labels.
//! - `handlers`: HTTP request handlers.
//! - `models`: Field table, client record and scoring response.
//! - `reference`: Reference table loading and sampling.
//! - `render`: Gauge, attribution chart and profile rendering.
//! - `routes`: Router construction.
//! - `scoring_client`: Scoring API client.

pub mod api;
pub mod core;
pub mod integrations;

// Re-export primary modules for shared use in tests and other binaries
pub mod comparison;
pub mod config;
pub mod errors;
pub mod form;
pub mod glossary;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod render;
pub mod routes;
pub mod scoring_client;
