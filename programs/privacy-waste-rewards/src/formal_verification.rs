// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Ledger invariants checked after every operation of random sequences
// 2. Rollback properties (a rejected call changes nothing)
// 3. Deterministic fuzzing of classification inputs
// ============================================================================
