//! Property-based tests for the encoder's output invariants.
//!
//! 1. **Fixed width**: every code is exactly [`CODE_LEN`] characters
//! 2. **Alphabet**: letter-initial input yields `[A-Z][0-6]{3}`
//! 3. **Determinism**: encoding the same input twice agrees
//! 4. **Case-insensitivity**: ASCII case never changes the code
//! 5. **Single letter**: a lone letter encodes to itself plus `"000"`
