//! End-to-end tests over the full reference run

mod e2e;
