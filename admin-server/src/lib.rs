//! Flight admin console server.
//!
//! A back-office web application for flight-booking administrators:
//! create reference data (countries, cities, airports, airplanes),
//! draft multi-leg flight cycles with offset-aware times, and submit
//! them to the booking backend.

pub mod backend;
pub mod cache;
pub mod domain;
pub mod form;
pub mod web;
