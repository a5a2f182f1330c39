use crate::errors::ValidationError;
use crate::wizard::ResumeFile;

/// 5 MiB. Files of exactly this size are accepted.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Checks extension, then size. Nothing here touches the network.
pub fn validate_resume(file: &ResumeFile) -> Result<(), ValidationError> {
    let allowed = file
        .extension()
        .map(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);
    if !allowed {
        return Err(ValidationError::UnsupportedExtension {
            file_name: file.file_name().to_string(),
        });
    }

    if file.size() > MAX_RESUME_BYTES {
        return Err(ValidationError::FileTooLarge { size: file.size() });
    }

    Ok(())
}

/// Trims a manually entered skill and rejects blanks and exact duplicates.
/// Comparison is case-sensitive: "python" and "Python" are different skills.
pub fn normalize_new_skill(input: &str, existing: &[String]) -> Result<String, ValidationError> {
    let skill = input.trim();
    if skill.is_empty() {
        return Err(ValidationError::EmptySkill);
    }
    if existing.iter().any(|s| s == skill) {
        return Err(ValidationError::DuplicateSkill(skill.to_string()));
    }
    Ok(skill.to_string())
}

pub fn normalize_job_role(input: &str) -> Result<String, ValidationError> {
    let role = input.trim();
    if role.is_empty() {
        return Err(ValidationError::EmptyJobRole);
    }
    Ok(role.to_string())
}
