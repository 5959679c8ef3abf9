use models::housing_location::HousingLocation;
use once_cell::sync::Lazy;

const PHOTO_BASE: &str = "https://angular.io/assets/images/tutorials/faa";

fn record(
    id: u32,
    name: &str,
    city: &str,
    state: &str,
    photo: &str,
    available_units: u32,
    wifi: bool,
    laundry: bool,
) -> HousingLocation {
    HousingLocation {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        photo: format!("{}/{}.jpg", PHOTO_BASE, photo),
        available_units,
        wifi,
        laundry,
    }
}

/// 内置种子数据：当配置的种子文件不存在时使用。
/// 与原始前端演示数据保持一致（10 条记录，id 0..=9）。
pub static BUILTIN_LOCATIONS: Lazy<Vec<HousingLocation>> = Lazy::new(|| {
    vec![
        record(0, "Acme Fresh Start Housing", "Chicago", "IL", "bernard-hermant-CLKGGwIBTaY-unsplash", 4, true, true),
        record(1, "A113 Transitional Housing", "Santa Monica", "CA", "brandon-griggs-wR11KBaB86U-unsplash", 0, false, true),
        record(2, "Warm Beds Housing Support", "Juneau", "AK", "i-do-nothing-but-love-lAyXdl1-Wmc-unsplash", 1, false, false),
        record(3, "Homesteady Housing", "Chicago", "IL", "ian-macdonald-W8z6aiwfi1E-unsplash", 1, true, false),
        record(4, "Happy Homes Group", "Gary", "IN", "krzysztof-hepner-978RAXoXnH4-unsplash", 1, true, false),
        record(5, "Hopeful Apartment Group", "Oakland", "CA", "r-architecture-JvQ0Q5IkeMM-unsplash", 2, true, true),
        record(6, "Seriously Safe Towns", "Oakland", "CA", "phil-hearing-IYfp2Ixe9nM-unsplash", 5, true, true),
        record(7, "Hopeful Housing Solutions", "Oakland", "CA", "r-architecture-GGupkreKwxA-unsplash", 2, true, true),
        record(8, "Seriously Safe Towns", "Oakland", "CA", "saru-robert-9rP3mxf8qWI-unsplash", 10, false, false),
        record(9, "Capital Safe Towns", "Portland", "OR", "webaliser-_TPTXZd9mOo-unsplash", 6, true, true),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique_and_ordered() {
        let records = &*BUILTIN_LOCATIONS;
        assert_eq!(records.len(), 10);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id, i as u32);
        }
    }
}
