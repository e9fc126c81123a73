use crate::*;

pub(crate) fn validate_uri(uri: &str) -> Result<(), RegistryError> {
    if uri.len() > MAX_URI_LEN {
        return Err(RegistryError::InvalidArgument(format!(
            "URI exceeds max length of {} bytes",
            MAX_URI_LEN
        )));
    }
    if uri.chars().any(|c| c.is_control()) {
        return Err(RegistryError::InvalidArgument(
            "URI must not contain control characters".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_commission_bps(bps: u16) -> Result<(), RegistryError> {
    if bps > MAX_COMMISSION_BPS {
        return Err(RegistryError::InvalidArgument(format!(
            "Commission must be <= {} bps",
            MAX_COMMISSION_BPS
        )));
    }
    Ok(())
}
