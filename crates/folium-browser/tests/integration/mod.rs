mod browsing;
mod detail;
mod resilience;
