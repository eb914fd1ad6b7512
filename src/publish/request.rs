use crate::lib::{
    dotnet::{DotnetPublishArguments, DotnetPublishRequest},
    errors::{PublishError, PublishRequestError},
    secret::SecretString,
};

use super::profile::{BuildMode, PublishProfile};

/// Validated inputs for one publish run. Holds no secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub profile: PublishProfile,
    pub user_name: String,
    pub project_path: String,
}

impl PublishRequest {
    /// Check the raw invocation values. Blank checks run before the
    /// configuration name is interpreted.
    pub fn validate(
        configuration: &str,
        user_name: &str,
        project_path: &str,
    ) -> Result<Self, PublishRequestError> {
        if configuration.trim().is_empty() {
            return Err(PublishRequestError::BlankConfiguration);
        }
        if user_name.trim().is_empty() {
            return Err(PublishRequestError::BlankUserName);
        }
        if project_path.trim().is_empty() {
            return Err(PublishRequestError::BlankProjectPath);
        }

        let profile = PublishProfile::parse(configuration)?;

        Ok(Self {
            profile,
            user_name: user_name.to_string(),
            project_path: project_path.to_string(),
        })
    }

    pub fn build_mode(&self) -> BuildMode {
        self.profile.build_mode()
    }

    /// Combine with the password into the tool's argument list.
    pub fn arguments(
        &self,
        password: &SecretString,
    ) -> Result<DotnetPublishArguments, PublishError> {
        if password.is_empty() {
            return Err(PublishError::EmptyPassword);
        }

        Ok(DotnetPublishArguments::new(DotnetPublishRequest {
            project_path: &self.project_path,
            build_mode: self.build_mode().as_str(),
            publish_profile: self.profile.as_str(),
            user_name: &self.user_name,
            password,
        }))
    }
}
