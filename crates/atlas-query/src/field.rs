/// The queryable fields of a city record. Filter keys and projections are
/// resolved against this set; names outside it never reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Population,
    Country,
    Latitude,
    Longitude,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Name,
        Field::Population,
        Field::Country,
        Field::Latitude,
        Field::Longitude,
    ];

    pub fn parse(name: &str) -> Option<Field> {
        match name {
            "id" => Some(Field::Id),
            "name" => Some(Field::Name),
            "population" => Some(Field::Population),
            "country" => Some(Field::Country),
            "latitude" => Some(Field::Latitude),
            "longitude" => Some(Field::Longitude),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Population => "population",
            Field::Country => "country",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }
}
