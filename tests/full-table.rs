mod common {
    use std::io::Write;

    pub fn init() {
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}

#[cfg(test)]
mod test {
    use std::error::Error;
    use std::fs::File;
    use std::str::FromStr;

    use inetnum::addr::Prefix;
    use prefix_rib::{
        match_options::{MatchOptions, MatchType},
        rib::Rib,
        test_types::PrefixAs,
    };

    // These constants are all contingent on the exact csv file being
    // loaded!
    const CSV_FILE_PATH: &str = "./tests/data/prefixes.csv";
    const INSERTS_NUM: usize = 24;
    const V4_PREFIXES_NUM: usize = 18;
    const V6_PREFIXES_NUM: usize = 6;

    fn load_prefixes(
        rib: &mut Rib<PrefixAs>,
    ) -> Result<usize, Box<dyn Error>> {
        let file = File::open(CSV_FILE_PATH)?;
        let mut rdr = csv::Reader::from_reader(file);
        let mut inserts = 0;
        for result in rdr.records() {
            let record = result?;
            let pfx = format!("{}/{}", &record[0], &record[1]);
            let asn: u32 = record[2].parse()?;
            rib.add(&pfx, PrefixAs(asn))?;
            inserts += 1;
        }
        Ok(inserts)
    }

    #[test]
    fn test_full_table_from_csv() -> Result<(), Box<dyn Error>> {
        crate::common::init();

        let mut rib = Rib::new();
        let inserts_num = load_prefixes(&mut rib)?;

        assert_eq!(inserts_num, INSERTS_NUM);
        assert_eq!(rib.len(), INSERTS_NUM);
        assert_eq!(rib.prefixes_v4_count(), V4_PREFIXES_NUM);
        assert_eq!(rib.prefixes_v6_count(), V6_PREFIXES_NUM);

        for (search, expected) in [
            ("8.8.8.8/32", 15169),
            ("8.8.9.0/24", 3356),
            ("8.128.0.0/16", 64496),
            ("10.10.10.200/32", 64515),
            ("10.10.10.100/32", 64514),
            ("10.10.11.0/24", 64513),
            ("10.11.0.0/16", 64512),
            ("185.34.10.0/23", 65400),
            ("185.34.11.1/32", 65402),
            ("100.64.0.0/10", 64496),
            ("2001:db8:1:2:3::/80", 64498),
            ("2001:db8:1:3::/64", 64497),
            ("2001:db8:ffff::/48", 64496),
            ("2a00:1450:4001::/48", 15169),
        ] {
            assert_eq!(
                rib.get(search)?,
                Some(&PrefixAs(expected)),
                "search {}",
                search
            );
        }

        // no IPv6 default route in the table
        assert_eq!(rib.get("2001:db9::/32")?, None);

        // every prefix in the table matches itself exactly
        for rec in rib.prefixes_iter() {
            assert!(rib.contains(&rec.prefix.to_string())?);
        }

        Ok(())
    }

    #[test]
    fn test_less_and_more_specifics() -> Result<(), Box<dyn Error>> {
        crate::common::init();

        let mut rib = Rib::new();
        load_prefixes(&mut rib)?;

        let search = Prefix::from_str("10.10.0.0/16")?;
        let res = rib.match_prefix(
            &search,
            &MatchOptions {
                match_type: MatchType::ExactMatch,
                include_less_specifics: true,
                include_more_specifics: true,
            },
        )?;
        println!("{}", res);

        assert_eq!(res.match_type, MatchType::ExactMatch);
        assert_eq!(res.prefix, Some(search));
        assert_eq!(res.meta, Some(&PrefixAs(64513)));

        let less = res
            .less_specifics
            .as_ref()
            .map(|ls| ls.iter().map(|r| r.prefix.to_string()).collect::<Vec<_>>());
        assert_eq!(
            less,
            Some(vec!["0.0.0.0/0".to_string(), "10.0.0.0/8".to_string()])
        );

        let more = res
            .more_specifics
            .as_ref()
            .map(|ms| ms.iter().map(|r| r.prefix.to_string()).collect::<Vec<_>>());
        assert_eq!(
            more,
            Some(vec![
                "10.10.10.0/24".to_string(),
                "10.10.10.128/25".to_string()
            ])
        );

        for rec in res.less_specifics.iter().flat_map(|ls| ls.iter()) {
            assert!(rec.prefix.len() < search.len());
        }
        for rec in res.more_specifics.iter().flat_map(|ms| ms.iter()) {
            assert!(rec.prefix.len() > search.len());
        }

        let less = rib.less_specifics_from(&Prefix::from_str("10.10.10.128/25")?)?;
        assert_eq!(
            less.iter().map(|r| *r.meta).collect::<Vec<_>>(),
            vec![PrefixAs(64496), PrefixAs(64512), PrefixAs(64513), PrefixAs(64514)]
        );

        let more = rib.more_specifics_from(&Prefix::from_str("185.34.0.0/16")?)?;
        assert_eq!(more.len(), 3);
        assert!(more.v6.is_empty());

        // the search prefix doesn't need to be stored
        let more = rib.more_specifics_from(&Prefix::from_str("8.8.0.0/16")?)?;
        assert_eq!(more.len(), 2);

        Ok(())
    }

    #[test]
    fn test_match_types() -> Result<(), Box<dyn Error>> {
        crate::common::init();

        let mut rib = Rib::new();
        load_prefixes(&mut rib)?;

        // not in the table, but covered by 185.34.0.0/16
        let search = Prefix::from_str("185.34.13.0/24")?;

        let res = rib.match_prefix(&search, &MatchOptions::exact_match())?;
        assert_eq!(res.match_type, MatchType::EmptyMatch);
        assert!(res.is_empty());
        assert_eq!(res.meta, None);
        assert!(res.less_specifics.is_none());
        assert!(res.more_specifics.is_none());

        let res = rib.match_prefix(&search, &MatchOptions::longest_match())?;
        assert_eq!(res.match_type, MatchType::LongestMatch);
        assert_eq!(res.prefix, Some(Prefix::from_str("185.34.0.0/16")?));
        assert_eq!(res.meta, Some(&PrefixAs(65400)));

        let res = rib.match_prefix(
            &search,
            &MatchOptions {
                match_type: MatchType::EmptyMatch,
                include_less_specifics: false,
                include_more_specifics: true,
            },
        )?;
        assert_eq!(res.match_type, MatchType::LongestMatch);
        assert_eq!(res.more_specifics.map(|ms| ms.len()), Some(0));

        let res = rib.match_prefix(
            &Prefix::from_str("2001:db9::/32")?,
            &MatchOptions::longest_match(),
        )?;
        assert_eq!(res.match_type, MatchType::EmptyMatch);
        assert_eq!(res.prefix, None);

        let res = rib.match_prefix(
            &Prefix::from_str("2001:db8::/32")?,
            &MatchOptions {
                match_type: MatchType::LongestMatch,
                include_less_specifics: true,
                include_more_specifics: true,
            },
        )?;
        assert_eq!(res.match_type, MatchType::ExactMatch);
        assert_eq!(res.less_specifics.as_ref().map(|ls| ls.len()), Some(0));
        assert_eq!(
            res.more_specifics.as_ref().map(|ms| ms.v6.len()),
            Some(2)
        );
        assert_eq!(res.more_specifics.as_ref().map(|ms| ms.v4.len()), Some(0));

        Ok(())
    }
}
