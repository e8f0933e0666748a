//! # Storefront
//!
//! Order history, order details and shop pages for a digital-goods
//! marketplace, rendered as typed page models.
//!
//! - **Domain types** - what the backend sends → [`domain::Order`], [`domain::Product`], [`domain::User`]
//! - **Status mapping** - status value to icon, label and color → [`status`]
//! - **Filtering and sorting** - the visitor's list choices → [`listing::FilterSelection`]
//! - **Timeline** - order progress along its lifecycle → [`timeline::render`]
//! - **Pages** - parameterized page builders → [`view`]
//! - **Controller** - session, fetching and error states → [`storefront::Storefront`]
//! - **Collaborators** - injected data sources → [`services`]
//! - **In-memory backend** - actor-backed collaborators for demos and tests → [`app_system::StorefrontSystem`]

pub mod domain;
pub mod error;
pub mod listing;
pub mod services;
pub mod status;
pub mod storefront;
pub mod timeline;
pub mod view;

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
