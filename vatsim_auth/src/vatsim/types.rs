use serde::{Deserialize, Serialize};

/// Token endpoint response, both grant types. Ephemeral: only the two token
/// strings and a computed absolute expiry survive into the session payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VatsimTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

// The provider nests the identity under a `data` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct VatsimUserEnvelope {
    pub(crate) data: VatsimUser,
}

/// Identity as the provider ships it, nested blocks and all.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VatsimUser {
    pub(crate) cid: String,
    pub(crate) personal: Personal,
    pub(crate) vatsim: VatsimDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Personal {
    pub(crate) name_first: String,
    pub(crate) name_last: String,
    pub(crate) name_full: String,
    pub(crate) email: String,
    pub(crate) country: Country,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Country {
    #[allow(dead_code)]
    pub(crate) id: String,
    pub(crate) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VatsimDetails {
    pub(crate) rating: Rating,
    pub(crate) pilotrating: Rating,
    pub(crate) division: Division,
    #[allow(dead_code)]
    pub(crate) region: Division,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Rating {
    #[allow(dead_code)]
    pub(crate) id: i64,
    #[allow(dead_code)]
    pub(crate) long: String,
    pub(crate) short: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Division {
    #[allow(dead_code)]
    pub(crate) id: String,
    pub(crate) name: String,
}

/// Pilot record from the public ratings API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatsimPilotStatistics {
    /// The CID, as the ratings API labels it.
    pub id: String,
    pub rating: i64,
    pub pilotrating: i64,
    pub susp_date: Option<String>,
    pub reg_date: String,
    pub region: String,
    pub division: String,
    pub subdivision: Option<String>,
    pub lastratingchange: String,
    #[serde(default)]
    pub atc: Option<AtcStatistics>,
    #[serde(default)]
    pub pilot: Option<PilotRatingStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtcStatistics {
    pub hours: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub c1: f64,
    pub c3: f64,
    pub i1: f64,
    pub i3: f64,
    pub sup: f64,
    pub adm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PilotRatingStatistics {
    pub hours: f64,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
    pub p3: Option<f64>,
    pub p4: Option<f64>,
}
