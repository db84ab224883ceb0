use super::domain::{Profile, Scheme};

/// Filters a catalog down to the schemes this profile can apply for,
/// preserving catalog order.
pub fn eligible_schemes<'a>(profile: &Profile, schemes: &'a [Scheme]) -> Vec<&'a Scheme> {
    schemes
        .iter()
        .filter(|scheme| qualifies(profile, scheme))
        .collect()
}

/// All constraints must hold together. An empty occupation list and an
/// absent gender constraint each match every profile.
pub fn qualifies(profile: &Profile, scheme: &Scheme) -> bool {
    if profile.age < scheme.min_age || profile.age > scheme.max_age {
        return false;
    }

    if profile.household_income() > scheme.income_limit {
        return false;
    }

    if !scheme.occupation_required.is_empty()
        && !scheme.occupation_required.contains(&profile.occupation)
    {
        return false;
    }

    match scheme.gender_required {
        Some(required) => profile.gender == required,
        None => true,
    }
}
