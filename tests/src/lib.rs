#[cfg(test)]
mod tests {
    use assoc_array::{AssociativeArray, Error, DEFAULT_CAPACITY};
    use rand::{thread_rng, Rng};

    fn student(i: usize) -> String {
        format!("Student {i}")
    }

    #[test]
    fn test_student_ids() -> anyhow::Result<()> {
        let mut rng = thread_rng();
        let class_size = 30;
        let ids: Vec<u128> = (0..class_size).map(|_| rng.gen()).collect();

        let mut student_ids: AssociativeArray<String, u128> = AssociativeArray::new();
        for (i, id) in ids.iter().enumerate() {
            student_ids.set(student(i), *id)?;
        }

        assert_eq!(student_ids.size(), class_size);
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(student_ids.get(&student(i))?, id);
        }

        Ok(())
    }

    #[test]
    fn test_struct_key() -> anyhow::Result<()> {
        #[derive(PartialEq)]
        struct Point {
            x: i32,
            y: i32,
        }

        let mut array: AssociativeArray<Point, &str> = AssociativeArray::new();
        array.set(Point { x: 1, y: 2 }, "Object key")?;

        let key = Point { x: 1, y: 2 };
        assert!(array.has_key(&key), "array should have the struct key");
        assert_eq!(array.get(&key)?, &"Object key");
        assert!(!array.has_key(&Point { x: 2, y: 1 }));

        Ok(())
    }

    #[test]
    fn test_empty_string_key() -> anyhow::Result<()> {
        let mut array: AssociativeArray<String, &str> = AssociativeArray::new();
        let key = String::new();

        array.set(key.clone(), "Empty string key")?;
        assert_eq!(array.get(&key)?, &"Empty string key");
        assert!(array.has_key(&key), "array should have the empty string key");

        array.remove(&key);
        assert!(!array.has_key(&key), "empty string key should be gone");
        assert_eq!(array.size(), 0);

        Ok(())
    }

    #[test]
    fn test_null_keys() {
        let mut array: AssociativeArray<String, u32> = AssociativeArray::new();
        array.set("a".to_string(), 1).unwrap();

        assert_eq!(array.set(None, 2), Err(Error::NullKey));
        assert_eq!(array.size(), 1);
        assert!(matches!(array.get(None), Err(Error::KeyNotFound(_))));
        assert!(!array.has_key(None));

        array.remove(None);
        assert_eq!(array.size(), 1);
        assert_eq!(array.get(&"a".to_string()), Ok(&1));
    }

    #[test]
    fn test_missing_key() {
        let array: AssociativeArray<u64, u64> = (0..10).map(|i| (i, i * i)).collect();

        assert!(matches!(array.get(&10), Err(Error::KeyNotFound(_))));
        assert!(!array.has_key(&10));
    }

    #[test]
    fn test_overwrite_keeps_size() -> anyhow::Result<()> {
        let mut array: AssociativeArray<&str, u32> = AssociativeArray::new();
        array.set("k", 1)?;
        array.set("k", 2)?;

        assert_eq!(array.size(), 1);
        assert_eq!(array.get(&"k")?, &2);

        Ok(())
    }

    #[test]
    fn test_remove_absent_key() -> anyhow::Result<()> {
        let mut array: AssociativeArray<u32, u32> = (0..5).map(|i| (i, i + 100)).collect();
        array.remove(&42);

        assert_eq!(array.size(), 5);
        for i in 0..5 {
            assert_eq!(array.get(&i)?, &(i + 100));
        }

        Ok(())
    }

    #[test]
    fn test_random_inserts_and_removes() -> anyhow::Result<()> {
        let mut rng = thread_rng();
        let num = 200;

        let mut keys: Vec<u32> = (0..num).collect();
        let values: Vec<u64> = (0..num).map(|_| rng.gen()).collect();

        let mut array: AssociativeArray<u32, u64> = AssociativeArray::new();
        for (key, value) in keys.iter().zip(values.iter()) {
            array.set(*key, *value)?;
        }
        assert_eq!(array.size(), num as usize);
        assert!(array.capacity() >= num as usize);

        // Remove a random half, checking the rest survive every step
        while keys.len() > num as usize / 2 {
            let key = keys.swap_remove(rng.gen_range(0..keys.len()));
            let before = array.size();

            assert_eq!(array.remove(&key), Some(values[key as usize]));
            assert!(!array.has_key(&key));
            assert_eq!(array.size(), before - 1);
        }

        for key in &keys {
            assert_eq!(array.get(key)?, &values[*key as usize]);
        }

        Ok(())
    }

    #[test]
    fn test_clone_independence() -> anyhow::Result<()> {
        let mut original: AssociativeArray<String, u32> = AssociativeArray::new();
        for i in 0..DEFAULT_CAPACITY * 2 {
            original.set(student(i), i as u32)?;
        }

        let mut copy = original.clone();
        assert_eq!(copy.size(), original.size());
        assert_eq!(copy, original);

        copy.set(student(0), 1000)?;
        copy.remove(&student(1));
        copy.set("new".to_string(), 7)?;

        assert_eq!(original.get(&student(0))?, &0);
        assert!(original.has_key(&student(1)));
        assert!(!original.has_key(&"new".to_string()));

        original.remove(&student(2));
        assert!(copy.has_key(&student(2)));

        Ok(())
    }

    #[test]
    fn test_display() -> anyhow::Result<()> {
        let mut array: AssociativeArray<&str, u32> = AssociativeArray::new();
        assert_eq!(array.to_string(), "{}");

        array.set("a", 1)?;
        assert_eq!(array.to_string(), "{a:1}");

        array.set("b", 2)?;
        assert_eq!(array.to_string(), "{a:1, b:2}");

        Ok(())
    }
}
