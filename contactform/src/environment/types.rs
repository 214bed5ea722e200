use contactform_core_contact_impl::ContactFeatureServiceImpl;
use contactform_core_health_impl::HealthFeatureServiceImpl;
use contactform_email_impl::EmailServiceImpl;
use contactform_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = contactform_api_rest::RestServer<HealthFeature, ContactFeature>;

// Email
pub type Email = EmailServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<Email>;
