use clinic::api::ClinicApi;
use clinic::model::{BookingRequest, NewDoctor, NewPatient};
use clinic::store::backend::StorageBackend;
use clinic::store::fs_backend::FsBackend;
use clinic::store::{MalformedPolicy, ResourceNames, Stores};
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

fn setup() -> (TempDir, Rc<FsBackend>) {
    let dir = TempDir::new().unwrap();
    let backend = Rc::new(FsBackend::new(dir.path()));
    (dir, backend)
}

fn api(backend: &Rc<FsBackend>) -> ClinicApi<FsBackend> {
    ClinicApi::new(Stores::new(
        Rc::clone(backend),
        &ResourceNames::default(),
        MalformedPolicy::Skip,
    ))
}

#[test]
fn test_fs_backend_read_write() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read("doctors.txt").unwrap(), None);

    backend.write("doctors.txt", "1|House|Diagnostics\n").unwrap();
    assert_eq!(
        backend.read("doctors.txt").unwrap(),
        Some("1|House|Diagnostics\n".to_string())
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("patients.txt", "first\n").unwrap();
    backend.write("patients.txt", "second\n").unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("patients.txt")).unwrap(),
        "second\n"
    );
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_ensure_keeps_content() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("appointments.txt"), "keep me\n").unwrap();

    backend.ensure("appointments.txt").unwrap();
    backend.ensure("doctors.txt").unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("appointments.txt")).unwrap(),
        "keep me\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("doctors.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_records_survive_a_new_process() {
    let (dir, backend) = setup();
    {
        let api = api(&backend);
        api.add_patient(NewPatient {
            name: "Ann | Lee".to_string(),
            age: 34,
            gender: "F".to_string(),
            phone: "555-0101".to_string(),
        })
        .unwrap();
        api.add_doctor(NewDoctor {
            name: "House".to_string(),
            specialization: "Diagnostics".to_string(),
        })
        .unwrap();
        api.book_appointment(BookingRequest {
            patient_id: 1,
            doctor_id: 1,
            date: "2025-11-24".to_string(),
            time_slot: "09:00-09:15".to_string(),
        })
        .unwrap();
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("patients.txt")).unwrap(),
        "1|Ann \\p Lee|34|F|555-0101\n"
    );

    let reopened = api(&Rc::new(FsBackend::new(dir.path())));
    let patients = reopened.list_patients().unwrap().patients;
    assert_eq!(patients[0].name, "Ann | Lee");

    let views = reopened.list_appointments().unwrap().appointments;
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].patient_name, "Ann | Lee");
    assert_eq!(views[0].doctor_name, "House");
}

#[test]
fn test_hand_edited_file_is_picked_up() {
    let (dir, backend) = setup();
    let api = api(&backend);

    fs::write(
        dir.path().join("doctors.txt"),
        "4|Grey|Surgery\nnot a record\n\n",
    )
    .unwrap();

    let doctors = api.list_doctors().unwrap().doctors;
    assert_eq!(doctors.len(), 1);

    let result = api
        .add_doctor(NewDoctor {
            name: "Wilson".to_string(),
            specialization: "Oncology".to_string(),
        })
        .unwrap();
    assert_eq!(result.created_id, Some(5));
    assert_eq!(
        fs::read_to_string(dir.path().join("doctors.txt")).unwrap(),
        "4|Grey|Surgery\n5|Wilson|Oncology\n"
    );
}

#[test]
fn test_invalid_utf8_does_not_lose_other_records() {
    let (dir, backend) = setup();
    let mut bytes = b"1|Ann|34|F|555\n2|Bob|40|M|556\n3|Caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"|50|F|557\n");
    fs::write(dir.path().join("patients.txt"), bytes).unwrap();

    let api = api(&backend);
    let listed = api.list_patients().unwrap().patients;
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Caf\u{FFFD}"]);

    let result = api
        .add_patient(NewPatient {
            name: "New".to_string(),
            age: 1,
            gender: "F".to_string(),
            phone: "1".to_string(),
        })
        .unwrap();
    assert_eq!(result.created_id, Some(4));

    let on_disk = fs::read_to_string(dir.path().join("patients.txt")).unwrap();
    assert!(on_disk.starts_with("1|Ann|34|F|555\n2|Bob|40|M|556\n"));
    assert!(on_disk.ends_with("4|New|1|F|1\n"));
}
