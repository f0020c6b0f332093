use crate::errors::Error;
use crate::storage;
use crate::types::RegistryConfig;
use soroban_sdk::{Address, Env};

/// Checks that `admin` signed the call and is the registry admin.
pub fn require_admin(env: &Env, admin: &Address) -> Result<RegistryConfig, Error> {
    admin.require_auth();
    let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
