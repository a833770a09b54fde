use crate::domain::model::{ClientRequest, FreelancerProfile};

pub use crate::domain::model::normalize_tags;

/// Returns the first freelancer, in input order, whose declared domains share
/// at least one tag with the requested services. `None` means no match, never
/// an error: malformed or missing tag fields on either side simply contribute
/// an empty set.
pub fn match_freelancer<'a>(
    request: &ClientRequest,
    freelancers: &'a [FreelancerProfile],
) -> Option<&'a FreelancerProfile> {
    let wanted = request.service_set();
    if wanted.is_empty() {
        tracing::debug!("client request carries no usable service tags");
        return None;
    }

    let found = freelancers
        .iter()
        .find(|f| !f.domain_set().is_disjoint(&wanted));

    match found {
        Some(f) => tracing::debug!(freelancer = %f.id, "matched freelancer"),
        None => tracing::debug!(candidates = freelancers.len(), "no eligible freelancer"),
    }

    found
}
