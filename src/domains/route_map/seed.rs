use crate::domains::route_map::types::NamedPoint;

/// Landmarks of the reference campus map, on a 20x20 grid.
pub fn campus_landmarks() -> Vec<NamedPoint> {
    vec![
        NamedPoint::new(13, 14, "Senate House"),
        NamedPoint::new(11, 5, "Central Administration"),
        NamedPoint::new(12, 12, "John Evans Atta Mills Library"),
        NamedPoint::new(14, 10, "Kwame Nkrumah Hall"),
        NamedPoint::new(0, 6, "Achimota Hall"),
        NamedPoint::new(5, 11, "Commonwealth Hall"),
        NamedPoint::new(1, 1, "Legon Hall"),
        NamedPoint::new(7, 13, "Balfour Hall"),
        NamedPoint::new(8, 8, "Herbert Macaulay Hall"),
        NamedPoint::new(10, 4, "Nana Oforiatta Boateng Hall"),
        NamedPoint::new(9, 9, "Volta Hall"),
        NamedPoint::new(4, 7, "Tawiah Hall"),
        NamedPoint::new(2, 2, "Legon School of Business"),
        NamedPoint::new(3, 3, "School of Engineering"),
        NamedPoint::new(6, 6, "School of Law"),
        NamedPoint::new(15, 0, "Nobel House"),
    ]
}
