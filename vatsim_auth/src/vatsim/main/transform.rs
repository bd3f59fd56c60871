use crate::session::User;
use crate::vatsim::types::VatsimUser;

/// Flatten the provider's nested identity into the local user shape.
/// Pure: no I/O and no failure path, a deserialized [`VatsimUser`] always
/// maps to a [`User`].
pub(crate) fn transform_vatsim_user(vatsim_user: VatsimUser) -> User {
    User {
        cid: vatsim_user.cid,
        first_name: vatsim_user.personal.name_first,
        last_name: vatsim_user.personal.name_last,
        full_name: vatsim_user.personal.name_full,
        email: vatsim_user.personal.email,
        country: vatsim_user.personal.country.name,
        rating: vatsim_user.vatsim.rating.short,
        pilot_rating: vatsim_user.vatsim.pilotrating.short,
        division: vatsim_user.vatsim.division.name,
    }
}
