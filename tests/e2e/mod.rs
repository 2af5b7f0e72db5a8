// End-to-end tests for the vocab backend HTTP API
//
// Two harnesses:
// - StubContext serves the router with in-memory storage, synthesizer and
//   language model, and a database pool that never connects. No docker needed.
// - TestContext adds an isolated database leased from one shared
//   testcontainers Postgres. These suites are ignored by default; run them
//   with `cargo test -- --ignored` on a machine with a docker daemon.

mod helpers;
mod test_health;
