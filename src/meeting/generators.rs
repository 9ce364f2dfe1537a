use rand::RngCore;

/// Number of random bytes behind a meeting code (rendered as twice as many hex chars)
pub const MEETING_CODE_BYTES: usize = 4;

/// Trait for generating meeting codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uppercase hex codes drawn from the thread-local CSPRNG
pub struct RandomHexCodeGenerator;

impl RandomHexCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomHexCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomHexCodeGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; MEETING_CODE_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        bytes.iter().map(|b| format!("{:02X}", b)).collect()
    }
}

/// Whether `code` has the shape of a generated meeting code
pub fn is_valid_code(code: &str) -> bool {
    code.len() == MEETING_CODE_BYTES * 2
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}
