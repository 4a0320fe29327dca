//! Cross-cutting helpers shared by pages and chrome.

pub mod auth;
