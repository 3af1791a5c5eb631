use std::process::{Command, Output};

const RAHUL: &str = "1234567890";
const RAHUL_DOB: &str = "1990-01-15";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_account-summary"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute app")
}

fn summary(account: &str, dob: &str) -> Output {
    run(&["--account", account, "--dob", dob])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

mod success {
    use super::*;

    #[test]
    fn rahul_sharma_summary() {
        let output = summary(RAHUL, RAHUL_DOB);
        let expected = "=== Account Summary ===\n\
                        Account Holder : Rahul Sharma\n\
                        Account Number : 1234567890\n\
                        Account Type   : Savings\n\
                        Branch (IFSC)  : Mumbai Main (SBIN0001234)\n\
                        Balance        : ₹150,000.50\n\
                        Last Updated   : 2025-10-25\n\
                        \n\
                        Recent Transactions:\n\
                        - 2025-10-24 | Salary Credit        | credit | +₹85,000.00\n\
                        - 2025-10-22 | UPI: Groceries       | debit  | -₹2,450.00\n\
                        - 2025-10-20 | ATM Withdrawal       | debit  | -₹6,000.00\n\
                        - 2025-10-18 | Interest Credit      | credit | +₹325.00\n\
                        - 2025-10-16 | Electricity Bill     | debit  | -₹1,700.00\n";

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), expected);
    }

    #[test]
    fn priya_iyer_summary() {
        let output = summary("9876543210", "1985-07-21");
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(0));
        assert!(text.contains("Account Holder : Priya Iyer\n"));
        assert!(text.contains("Account Type   : Current\n"));
        assert!(text.contains("Branch (IFSC)  : Chennai Adyar (SBIN0005678)\n"));
        assert!(text.contains("Balance        : ₹42,500.75\n"));
        assert!(text.contains("- 2025-10-22 | UPI: Client Payment  | credit | +₹30,000.00\n"));
        assert!(text.ends_with("- 2025-10-17 | NEFT Fee             | debit  | -₹15.00\n"));
    }

    #[test]
    fn punctuated_account_gives_identical_output() {
        let plain = summary(RAHUL, RAHUL_DOB);
        let punctuated = summary("123-456-7890", RAHUL_DOB);

        assert_eq!(punctuated.status.code(), Some(0));
        assert_eq!(stdout(&plain), stdout(&punctuated));
    }

    #[test]
    fn signs_follow_type() {
        let text = stdout(&summary(RAHUL, RAHUL_DOB));
        for line in text.lines().filter(|line| line.starts_with("- ")) {
            let fields: Vec<&str> = line.split(" | ").collect();
            match fields[2].trim_end() {
                "credit" => assert!(fields[3].starts_with('+'), "{}", line),
                "debit" => assert!(fields[3].starts_with('-'), "{}", line),
                other => panic!("unexpected type {:?}", other),
            }
        }
    }
}

mod failures {
    use super::*;

    const LENGTH_ERROR: &str = "Error: account must be 8–16 digits.\n";
    const NOT_FOUND: &str = "No demo record found for this account number.\n";
    const DOB_MISMATCH: &str = "DOB does not match our demo records.\n";

    #[test]
    fn short_account_exits_two() {
        let output = summary("1234567", RAHUL_DOB);
        assert_eq!(output.status.code(), Some(2));
        assert_eq!(stdout(&output), LENGTH_ERROR);
    }

    #[test]
    fn long_account_exits_two() {
        let output = summary("12345678901234567", RAHUL_DOB);
        assert_eq!(output.status.code(), Some(2));
        assert_eq!(stdout(&output), LENGTH_ERROR);
    }

    #[test]
    fn existing_account_padded_past_sixteen_exits_two() {
        let output = summary("1234567890-1234567", RAHUL_DOB);
        assert_eq!(output.status.code(), Some(2));
        assert_eq!(stdout(&output), LENGTH_ERROR);
    }

    #[test]
    fn unknown_account_exits_one() {
        let output = summary("11112222", RAHUL_DOB);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), NOT_FOUND);
    }

    #[test]
    fn wrong_dob_exits_one() {
        let output = summary(RAHUL, "1990-01-16");
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), DOB_MISMATCH);
    }

    #[test]
    fn unpadded_dob_does_not_match() {
        let output = summary(RAHUL, "1990-1-15");
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout(&output), DOB_MISMATCH);
    }

    #[test]
    fn missing_dob_is_usage_error() {
        let output = run(&["--account", RAHUL]);
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("--dob"));
    }

    #[test]
    fn no_arguments_is_usage_error() {
        let output = run(&[]);
        assert_eq!(output.status.code(), Some(2));
        assert!(stdout(&output).is_empty());
    }
}
